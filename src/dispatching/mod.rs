//! Dispatching rules for ordering ready operations.
//!
//! A dispatching rule scores each ready operation; the dispatcher commits
//! operations in ascending score order. Equal scores fall back to the
//! operation key, which keeps every schedule reproducible.
//!
//! # Usage
//!
//! ```
//! use u_jobshop::dispatching::{rules, DispatchingRule};
//! use u_jobshop::models::Operation;
//!
//! let op = Operation::new("J1_1", "J1", 0).with_duration(4);
//! assert_eq!(rules::Spt.evaluate(&op), 4.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

pub mod rules;

use std::fmt::Debug;

use crate::graph::PrecedenceGraph;
use crate::models::Operation;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates operation priority.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of an operation.
    fn evaluate(&self, operation: &Operation) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Sorts ready node indices by rule score, ties broken by operation key.
///
/// Node indices of a [`PrecedenceGraph`] follow key order, so the index is
/// the key tie-breaker.
pub fn order_ready(rule: &dyn DispatchingRule, graph: &PrecedenceGraph, ready: &mut [usize]) {
    ready.sort_by(|&a, &b| {
        let score_a = rule.evaluate(graph.operation(a));
        let score_b = rule.evaluate(graph.operation(b));
        score_a.total_cmp(&score_b).then(a.cmp(&b))
    });
}
