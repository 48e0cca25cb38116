//! Job-shop scheduling engine for the U-Engine ecosystem.
//!
//! Turns a set of job operations into a feasible machine-by-machine
//! timetable: builds the precedence graph, rejects cyclic input, computes
//! the critical path as a makespan lower bound, and dispatches operations
//! greedily under the shortest-processing-time rule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Operation`, `Schedule`,
//!   `ScheduleEntry`, `CriticalPath`
//! - **`graph`**: Precedence graph construction, cycle detection, critical path
//! - **`dispatching`**: Dispatching rules (SPT) and ready-set ordering
//! - **`scheduler`**: Greedy list scheduler and KPIs
//! - **`validation`**: Strict input integrity checks
//! - **`parsing`** / **`export`**: Dataset text parser and CSV export
//!
//! # Example
//!
//! ```
//! use u_jobshop::models::{operations_of, Job};
//! use u_jobshop::scheduler::ListScheduler;
//!
//! let ops = operations_of(vec![
//!     Job::new("J1").with_step("M1", 2).with_step("M2", 4),
//!     Job::new("J2").with_step("M2", 1),
//! ]);
//! let outcome = ListScheduler::new().schedule(&ops, &[]).unwrap();
//! assert_eq!(outcome.makespan(), 6);
//! assert_eq!(outcome.critical_path.operations, vec!["J1_1", "J1_2"]);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod config;
pub mod dispatching;
mod error;
pub mod export;
pub mod graph;
pub mod models;
pub mod parsing;
pub mod scheduler;
pub mod validation;

pub use config::SchedulerConfig;
pub use error::ScheduleError;
pub use graph::PrecedenceGraph;
pub use scheduler::{schedule, ListScheduler, ScheduleOutcome};
