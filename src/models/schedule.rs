//! Schedule (solution) model.
//!
//! A schedule is the machine-by-machine timetable produced by the
//! dispatcher: one entry per operation, in the order it was committed.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a schedule: an operation placed on a machine in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Machine the operation runs on.
    pub machine: String,
    /// Operation key.
    pub operation: String,
    /// Parent job (denormalized for query convenience).
    pub job_id: String,
    /// Start time.
    pub start: i64,
    /// Finish time (`start + duration`).
    pub finish: i64,
    /// Whether the operation lies on the critical path.
    pub is_critical: bool,
}

impl ScheduleEntry {
    /// Creates a non-critical entry.
    pub fn new(
        machine: impl Into<String>,
        operation: impl Into<String>,
        job_id: impl Into<String>,
        start: i64,
        finish: i64,
    ) -> Self {
        Self {
            machine: machine.into(),
            operation: operation.into(),
            job_id: job_id.into(),
            start,
            finish,
            is_critical: false,
        }
    }

    /// Sets the critical flag.
    pub fn with_critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    /// Occupied time (`finish - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }
}

/// The longest duration-weighted precedence chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPath {
    /// Operation keys from first to last.
    pub operations: Vec<String>,
    /// Sum of durations along the path.
    pub length: i64,
}

impl CriticalPath {
    /// Whether `operation` lies on this path.
    pub fn contains(&self, operation: &str) -> bool {
        self.operations.iter().any(|o| o == operation)
    }

    /// Number of operations on the path.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the path is empty (no operations were scheduled).
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// A complete schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Entries in commit order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: latest finish time across all entries.
    pub fn makespan(&self) -> i64 {
        self.entries.iter().map(|e| e.finish).max().unwrap_or(0)
    }

    /// Finds the entry for a given operation.
    pub fn entry_for(&self, operation: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.operation == operation)
    }

    /// Returns all entries on a machine, in commit order.
    pub fn entries_for_machine(&self, machine: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.machine == machine).collect()
    }

    /// Returns all entries of a job, in commit order.
    pub fn entries_for_job(&self, job_id: &str) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.job_id == job_id).collect()
    }

    /// Completion time of a job (latest finish of its entries).
    pub fn job_completion_time(&self, job_id: &str) -> Option<i64> {
        self.entries_for_job(job_id).iter().map(|e| e.finish).max()
    }

    /// Entries flagged critical.
    pub fn critical_entries(&self) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.is_critical).collect()
    }

    /// Busy time per machine, keyed and ordered by machine id.
    pub fn busy_time_by_machine(&self) -> BTreeMap<String, i64> {
        let mut busy = BTreeMap::new();
        for e in &self.entries {
            *busy.entry(e.machine.clone()).or_insert(0) += e.duration();
        }
        busy
    }

    /// Utilization of every machine with entries: busy time / makespan.
    ///
    /// Empty when the makespan is zero.
    pub fn utilization_by_machine(&self) -> BTreeMap<String, f64> {
        self.utilization_since(0)
    }

    /// Utilization measured over `[origin, makespan)`.
    ///
    /// Empty when that span is not positive.
    pub fn utilization_since(&self, origin: i64) -> BTreeMap<String, f64> {
        let horizon = self.makespan().saturating_sub(origin);
        if horizon <= 0 {
            return BTreeMap::new();
        }
        self.busy_time_by_machine()
            .into_iter()
            .map(|(m, busy)| (m, busy as f64 / horizon as f64))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
