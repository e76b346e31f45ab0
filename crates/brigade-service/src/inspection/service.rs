//! Uniform inspection summaries.

use std::sync::Arc;

use brigade_core::result::AppResult;
use brigade_database::repositories::{AccountRepository, InspectionRepository};
use brigade_entity::inspection::InspectionSummary;

/// Handles uniform inspection queries.
#[derive(Debug, Clone)]
pub struct InspectionService {
    /// Inspection repository.
    repo: Arc<InspectionRepository>,
    /// Account repository, for the Boy roster.
    accounts: Arc<AccountRepository>,
}

impl InspectionService {
    /// Creates a new inspection service.
    pub fn new(repo: Arc<InspectionRepository>, accounts: Arc<AccountRepository>) -> Self {
        Self { repo, accounts }
    }

    /// All inspection records joined with member details, plus the current
    /// roster of non-graduated Boys eligible for inspection.
    pub async fn summary(&self) -> AppResult<InspectionSummary> {
        let inspections = self.repo.find_records().await?;
        let boys = self.accounts.find_boy_roster().await?;
        Ok(InspectionSummary { inspections, boys })
    }
}
