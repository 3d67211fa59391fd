// In crates/report/src/aggregator.rs

use crate::policy::UrgencyPolicy;
use chrono::Utc;
use core_types::{Report, SymbolReport};

/// Combines per-symbol reports into one run-level report.
#[derive(Debug, Default)]
pub struct ReportAggregator;

impl ReportAggregator {
    /// Builds the run report, stamping it with the aggregation time and the
    /// urgency verdict of the given policy.
    ///
    /// Callers pass only the successfully analyzed symbols; a symbol whose
    /// fetch or analysis failed never reaches the aggregator.
    pub fn aggregate(symbol_reports: Vec<SymbolReport>, policy: &dyn UrgencyPolicy) -> Report {
        let urgent = policy.is_urgent(&symbol_reports);
        Report {
            symbol_reports,
            urgent,
            generated_at: Utc::now(),
        }
    }
}
