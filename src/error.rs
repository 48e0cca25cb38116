//! Errors returned by the scheduling engine.

use thiserror::Error;

/// Errors that can occur while building the precedence graph or dispatching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The precedence graph contains a cycle; no schedule exists.
    #[error("Circular dependency detected among operations: {operations:?}")]
    CircularDependency {
        /// Operations that could not be ordered (sorted by key).
        operations: Vec<String>,
    },
    /// Two operations share the same key.
    #[error("Duplicate operation key: {0}")]
    DuplicateOperation(String),
    /// An operation's finish time does not fit in `i64`.
    #[error("Finish time of operation {operation} overflows")]
    TimeOverflow {
        /// Operation being placed.
        operation: String,
    },
    /// The dispatcher found nothing ready while work remained.
    ///
    /// Only reachable if the graph was not validated as acyclic.
    #[error("Internal error: no ready operations while {remaining} remain unscheduled")]
    NoReadyOperations {
        /// Number of unscheduled operations.
        remaining: usize,
    },
}

impl ScheduleError {
    /// Whether the input topology itself is unschedulable.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ScheduleError::CircularDependency { .. })
    }
}
