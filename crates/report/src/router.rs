// In crates/report/src/router.rs

use crate::types::RecipientSet;

/// Maps the urgency flag and configured addresses to a concrete recipient
/// list.
#[derive(Debug, Default)]
pub struct RecipientRouter;

impl RecipientRouter {
    /// Routes one run's report.
    ///
    /// The primary recipient is always included; the urgent recipient is
    /// appended only on an urgent run and only when configured. Insertion
    /// order is preserved and duplicates are dropped, so a primary address
    /// doubling as the urgent address is delivered to once.
    pub fn route(recipients: &RecipientSet, urgent: bool) -> Vec<String> {
        let mut routed = vec![recipients.primary.clone()];

        if urgent {
            if let Some(address) = &recipients.urgent {
                if !routed.contains(address) {
                    routed.push(address.clone());
                }
            }
        }

        routed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipients(primary: &str, urgent: Option<&str>) -> RecipientSet {
        RecipientSet {
            primary: primary.to_string(),
            urgent: urgent.map(str::to_string),
        }
    }

    #[test]
    fn urgent_runs_add_the_urgent_recipient() {
        let set = recipients("a@x", Some("b@x"));
        assert_eq!(RecipientRouter::route(&set, true), ["a@x", "b@x"]);
        assert_eq!(RecipientRouter::route(&set, false), ["a@x"]);
    }

    #[test]
    fn unconfigured_urgent_recipient_is_skipped() {
        let set = recipients("a@x", None);
        assert_eq!(RecipientRouter::route(&set, true), ["a@x"]);
    }

    #[test]
    fn duplicate_addresses_collapse() {
        let set = recipients("a@x", Some("a@x"));
        assert_eq!(RecipientRouter::route(&set, true), ["a@x"]);
    }

    #[test]
    fn routing_is_idempotent() {
        let set = recipients("a@x", Some("b@x"));
        let first = RecipientRouter::route(&set, true);
        let second = RecipientRouter::route(&set, true);
        assert_eq!(first, second);
    }
}
