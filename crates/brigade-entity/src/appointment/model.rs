//! Appointment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::account::{AccountBrief, Role};

/// A named appointment (e.g. Duty NCO, Colour Bearer) held by a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Unique appointment identifier.
    pub id: Uuid,
    /// Unique appointment title.
    pub appointment_name: String,
    /// Role tier the appointment belongs to (never Admin).
    pub role: Role,
    /// Account currently holding the appointment.
    pub account_id: Uuid,
    /// When the appointment was created.
    pub created_at: DateTime<Utc>,
    /// When the appointment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    /// Unique appointment title.
    pub appointment_name: String,
    /// Role tier the appointment belongs to.
    pub role: Role,
    /// Account taking the appointment.
    pub account_id: Uuid,
}

/// Appointment listing joined with the accounts currently holding them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRoster {
    /// All appointments on record.
    pub appointments: Vec<Appointment>,
    /// Brief records for the holders that still exist.
    pub holders: Vec<AccountBrief>,
}
