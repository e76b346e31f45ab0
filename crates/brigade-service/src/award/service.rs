//! Award badge listings.

use std::sync::Arc;

use brigade_core::result::AppResult;
use brigade_database::repositories::AwardRepository;
use brigade_entity::award::Award;

/// Handles award badge queries. The awards scheme is read-only over HTTP;
/// badge content is maintained directly in storage.
#[derive(Debug, Clone)]
pub struct AwardService {
    /// Award repository.
    repo: Arc<AwardRepository>,
}

impl AwardService {
    /// Creates a new award service.
    pub fn new(repo: Arc<AwardRepository>) -> Self {
        Self { repo }
    }

    /// Lists every badge in the awards scheme.
    pub async fn list(&self) -> AppResult<Vec<Award>> {
        self.repo.find_all().await
    }
}
