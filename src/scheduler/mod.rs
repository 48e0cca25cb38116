//! Greedy list scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `ListScheduler` computes the critical path of the precedence graph, then
//! dispatches ready operations pass by pass under the SPT rule, placing each
//! at the later of its machine's free time and its predecessor's finish.
//! It is not optimal, but is deterministic and fast.
//!
//! # KPI
//!
//! `ScheduleKpi` reports makespan, the critical-path lower bound and the
//! gap between them, plus machine utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod list;

pub use kpi::ScheduleKpi;
pub use list::{schedule, ListScheduler, ScheduleOutcome, ScheduleRequest};
