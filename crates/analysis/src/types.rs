// In crates/analysis/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisSettings {
    /// Window size of the short moving average, in trading days.
    #[serde(default = "default_short_window")]
    pub short_window: usize,

    /// Window size of the long moving average, in trading days.
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
        }
    }
}

/// Helper functions for serde defaults
fn default_short_window() -> usize {
    2
}
fn default_long_window() -> usize {
    210
}
