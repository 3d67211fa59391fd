// In crates/report/src/policy.rs

use crate::types::UrgencyPolicyKind;
use core_types::{CrossEvent, SymbolReport, SymbolStatus};

/// The universal interface for an urgency policy.
///
/// A policy decides whether a run's per-symbol results warrant escalating
/// the report. Policies are explicit, named strategies so the criterion can
/// be swapped in configuration instead of forked in code.
pub trait UrgencyPolicy: Send + Sync {
    /// The name of the policy.
    fn name(&self) -> &'static str;

    /// Whether these per-symbol results should flag the report as urgent.
    fn is_urgent(&self, symbol_reports: &[SymbolReport]) -> bool;
}

/// Flags the run when any symbol's short MA is below its long MA today,
/// regardless of when the cross happened.
#[derive(Debug, Default)]
pub struct AnyBelowPolicy;

impl UrgencyPolicy for AnyBelowPolicy {
    fn name(&self) -> &'static str {
        "AnyBelow"
    }

    fn is_urgent(&self, symbol_reports: &[SymbolReport]) -> bool {
        symbol_reports
            .iter()
            .any(|report| report.status == SymbolStatus::Below)
    }
}

/// Flags the run only when some symbol changed sides since yesterday, in
/// either direction.
#[derive(Debug, Default)]
pub struct AnyCrossPolicy;

impl UrgencyPolicy for AnyCrossPolicy {
    fn name(&self) -> &'static str {
        "AnyCross"
    }

    fn is_urgent(&self, symbol_reports: &[SymbolReport]) -> bool {
        symbol_reports
            .iter()
            .any(|report| report.cross_event != CrossEvent::None)
    }
}

/// Looks up the policy implementation for a configured kind.
pub fn policy_for(kind: UrgencyPolicyKind) -> Box<dyn UrgencyPolicy> {
    match kind {
        UrgencyPolicyKind::AnyBelow => Box::new(AnyBelowPolicy),
        UrgencyPolicyKind::AnyCross => Box::new(AnyCrossPolicy),
    }
}
