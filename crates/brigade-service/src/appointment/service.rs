//! Appointment roster orchestration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use brigade_core::error::AppError;
use brigade_core::result::AppResult;
use brigade_database::repositories::{AccountRepository, AppointmentRepository};
use brigade_entity::appointment::{Appointment, AppointmentRoster, NewAppointment};
use brigade_entity::account::Role;

/// Handles appointment records and their holder listings.
#[derive(Debug, Clone)]
pub struct AppointmentService {
    /// Appointment repository.
    repo: Arc<AppointmentRepository>,
    /// Account repository, for holder existence checks.
    accounts: Arc<AccountRepository>,
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(repo: Arc<AppointmentRepository>, accounts: Arc<AccountRepository>) -> Self {
        Self { repo, accounts }
    }

    /// Lists all appointments together with brief records for the holders
    /// that still exist.
    pub async fn list(&self) -> AppResult<AppointmentRoster> {
        let appointments = self.repo.find_all().await?;
        let holders = self.repo.find_holders().await?;
        Ok(AppointmentRoster {
            appointments,
            holders,
        })
    }

    /// Creates an appointment. Appointments belong to the member tiers;
    /// Admin is a system role, not an appointment tier.
    pub async fn create(&self, data: NewAppointment) -> AppResult<Appointment> {
        if data.appointment_name.trim().is_empty() {
            return Err(AppError::validation("Appointment name is required"));
        }
        if data.role == Role::Admin {
            return Err(AppError::validation(
                "Appointments cannot belong to the admin role",
            ));
        }
        self.require_account(data.account_id).await?;

        let appointment = self.repo.create(&data).await?;
        info!(
            appointment_id = %appointment.id,
            account_id = %appointment.account_id,
            "Appointment created"
        );
        Ok(appointment)
    }

    /// Reassigns an appointment to a different account.
    pub async fn reassign(&self, id: Uuid, account_id: Uuid) -> AppResult<Appointment> {
        self.require_account(account_id).await?;

        let appointment = self.repo.reassign(id, account_id).await?;
        info!(
            appointment_id = %appointment.id,
            account_id = %account_id,
            "Appointment reassigned"
        );
        Ok(appointment)
    }

    /// Deletes an appointment.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::not_found(format!("Appointment {id} not found")));
        }
        info!(appointment_id = %id, "Appointment deleted");
        Ok(())
    }

    async fn require_account(&self, account_id: Uuid) -> AppResult<()> {
        self.accounts
            .find_by_id(account_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Account {account_id} not found")))
    }
}
