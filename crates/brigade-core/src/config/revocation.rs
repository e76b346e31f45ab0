//! Token revocation sweep configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the periodic revocation ledger sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationConfig {
    /// Interval between expired-entry purges in minutes.
    #[serde(default = "default_purge_interval")]
    pub purge_interval_minutes: u64,
}

impl Default for RevocationConfig {
    fn default() -> Self {
        Self {
            purge_interval_minutes: default_purge_interval(),
        }
    }
}

fn default_purge_interval() -> u64 {
    15
}
