// In crates/report/src/types.rs

use serde::{Deserialize, Serialize};

/// Which urgency rule the aggregator applies to a run's reports.
///
/// Selected in configuration as `report.urgency_policy = "any_below"` or
/// `"any_cross"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyPolicyKind {
    /// Urgent when any symbol's short MA sits below its long MA today.
    #[default]
    AnyBelow,
    /// Urgent only when any symbol crossed sides since yesterday.
    AnyCross,
}

/// The configured delivery addresses for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientSet {
    /// Always receives the report.
    pub primary: String,
    /// Additionally receives the report when the run is flagged urgent.
    #[serde(default)]
    pub urgent: Option<String>,
}
