//! Appointment repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::account::AccountBrief;
use brigade_entity::appointment::{Appointment, NewAppointment};

/// Repository for appointment CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all appointments.
    pub async fn find_all(&self) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments ORDER BY appointment_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list appointments", e))
    }

    /// Find an appointment by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find appointment", e)
            })
    }

    /// Brief records for every account currently holding an appointment.
    pub async fn find_holders(&self) -> AppResult<Vec<AccountBrief>> {
        sqlx::query_as::<_, AccountBrief>(
            "SELECT DISTINCT a.id, a.account_name FROM accounts a \
             JOIN appointments ap ON ap.account_id = a.id \
             ORDER BY a.account_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list appointment holders", e)
        })
    }

    /// Create a new appointment.
    pub async fn create(&self, data: &NewAppointment) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (appointment_name, role, account_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.appointment_name)
        .bind(data.role)
        .bind(data.account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("appointments_appointment_name_key") =>
            {
                AppError::conflict(format!(
                    "Appointment '{}' already exists",
                    data.appointment_name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create appointment", e),
        })
    }

    /// Reassign an appointment to a different account.
    pub async fn reassign(&self, id: Uuid, account_id: Uuid) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET account_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to reassign appointment", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Appointment {id} not found")))
    }

    /// Delete an appointment by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete appointment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
