//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest finish time |
//! | Critical length | Longest precedence chain (lower bound on C_max) |
//! | Lower-bound gap | Makespan − start time − critical length |
//! | Critical count | Operations on the critical path |
//! | Utilization | Busy time / (makespan − start time) per machine |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use super::ScheduleOutcome;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest finish time.
    pub makespan: i64,
    /// Length of the critical path.
    pub critical_length: i64,
    /// How far the makespan exceeds the critical-path bound.
    pub lower_bound_gap: i64,
    /// Number of operations on the critical path.
    pub critical_count: usize,
    /// Number of scheduled operations.
    pub operation_count: usize,
    /// Per-machine utilization (0.0..1.0).
    pub utilization_by_machine: BTreeMap<String, f64>,
    /// Mean utilization over machines with work.
    pub avg_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduling outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let makespan = outcome.makespan();
        let critical_length = outcome.critical_path.length;
        let utilization_by_machine = outcome.schedule.utilization_since(outcome.start_time);
        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.values().sum::<f64>() / utilization_by_machine.len() as f64
        };

        Self {
            makespan,
            critical_length,
            lower_bound_gap: (outcome.span() - critical_length).max(0),
            critical_count: outcome.critical_path.len(),
            operation_count: outcome.schedule.len(),
            utilization_by_machine,
            avg_utilization,
        }
    }

    /// Whether the makespan equals the critical-path bound (provably optimal).
    pub fn is_lower_bound_tight(&self) -> bool {
        self.lower_bound_gap == 0
    }
}
