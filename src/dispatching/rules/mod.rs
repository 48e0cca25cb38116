//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority operations.

use super::{DispatchingRule, RuleScore};
use crate::models::Operation;

/// Shortest Processing Time.
///
/// Dispatches the ready operation with the smallest duration first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, operation: &Operation) -> RuleScore {
        operation.duration as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spt_score_is_duration() {
        let short = Operation::new("A", "A", 0).with_duration(1);
        let long = Operation::new("B", "B", 0).with_duration(9);
        assert!(Spt.evaluate(&short) < Spt.evaluate(&long));
        assert_eq!(Spt.evaluate(&long), 9.0);
    }

    #[test]
    fn test_spt_metadata() {
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }
}
