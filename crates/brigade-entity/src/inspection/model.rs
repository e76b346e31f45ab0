//! Uniform inspection entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::{AccountBrief, BoyBrief};

/// One inspection joined with its boy and assessor records.
///
/// Score and assessment date stay empty until the inspection has been
/// carried out. Both the boy and the assessor must be inspection-eligible
/// (staff, or a Boy holding an appointment, for the assessor side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Inspection identifier.
    pub id: Uuid,
    /// Awarded score, if assessed.
    pub score: Option<i32>,
    /// When the inspection took place.
    pub assessed_date: Option<DateTime<Utc>>,
    /// The inspected Boy.
    pub boy: BoyBrief,
    /// The assessor, when one has been recorded.
    pub assessor: Option<AccountBrief>,
}

/// Full inspection summary: all records plus the current Boy roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionSummary {
    /// All inspection records with joined member details.
    pub inspections: Vec<InspectionRecord>,
    /// Non-graduated Boy accounts eligible for inspection.
    pub boys: Vec<BoyBrief>,
}
