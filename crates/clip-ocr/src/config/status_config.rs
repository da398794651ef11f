use crate::config::default_dwell_secs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Status marker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Seconds a Success/Failure marker stays visible.
    #[serde(default = "default_dwell_secs")]
    pub dwell_secs: u64,
}

impl StatusConfig {
    /// Dwell interval as a `Duration`.
    pub fn dwell(&self) -> Duration {
        Duration::from_secs(self.dwell_secs)
    }
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            dwell_secs: default_dwell_secs(),
        }
    }
}
