//! Award badge entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A proficiency badge in the awards scheme.
///
/// A badge either carries a flat description or is broken into
/// masteries, never both; the table constraint enforces the split.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Award {
    /// Unique badge identifier.
    pub id: Uuid,
    /// Unique badge name.
    pub badge_name: String,
    /// Requirements to earn the badge.
    pub badge_requirements: Option<String>,
    /// Flat description, present only for badges without masteries.
    pub badge_description: Option<String>,
    /// Short hint shown alongside the description.
    pub badge_description_hint: Option<String>,
    /// Recommended programme level (1 through 4).
    pub recommended_level: Option<i16>,
    /// Masteries the badge is broken into, empty for flat badges.
    pub masteries: Json<Vec<Mastery>>,
    /// When the badge was created.
    pub created_at: DateTime<Utc>,
    /// When the badge was last updated.
    pub updated_at: DateTime<Utc>,
}

/// One mastery stage of a badge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mastery {
    /// Mastery name.
    pub mastery_name: String,
    /// Description of the mastery.
    pub mastery_description: Option<String>,
    /// Requirements to complete the mastery.
    pub mastery_requirements: Option<String>,
    /// Short hint shown alongside the description.
    pub mastery_description_hint: Option<String>,
    /// Recommended programme level (1 through 4).
    pub recommended_level: Option<i16>,
}
