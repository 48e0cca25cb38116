//! Job model.
//!
//! A job is an ordered chain of operations. Each operation must finish
//! before the next one in the chain may start.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::Operation;

/// A single step of a job: machine and duration, before keys are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Machine identifier.
    pub machine: String,
    /// Processing time.
    pub duration: i64,
}

/// A job: a strictly ordered sequence of machine steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Steps in processing order.
    pub steps: Vec<Step>,
}

impl Job {
    /// Creates a job with no steps.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    pub fn with_step(mut self, machine: impl Into<String>, duration: i64) -> Self {
        self.steps.push(Step {
            machine: machine.into(),
            duration,
        });
        self
    }

    /// Total processing time across all steps.
    pub fn total_duration(&self) -> i64 {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Key of the operation at `position` (1-based), e.g. `J1_2`.
    pub fn operation_key(&self, position: usize) -> String {
        format!("{}_{}", self.id, position)
    }

    /// Expands the job into chained operations.
    ///
    /// Operation `k` (1-based) is keyed `<job>_<k>` and depends on `<job>_<k-1>`.
    pub fn into_operations(self) -> Vec<Operation> {
        let mut ops = Vec::with_capacity(self.steps.len());
        for (i, step) in self.steps.iter().enumerate() {
            let mut op = Operation::new(self.operation_key(i + 1), &self.id, i as u32)
                .with_duration(step.duration)
                .on_machine(&step.machine);
            if i > 0 {
                op = op.with_predecessor(self.operation_key(i));
            }
            ops.push(op);
        }
        ops
    }
}

/// Expands several jobs into one flat operation list.
pub fn operations_of(jobs: impl IntoIterator<Item = Job>) -> Vec<Operation> {
    jobs.into_iter().flat_map(Job::into_operations).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1").with_step("M1", 3).with_step("M2", 4);
        assert_eq!(job.id, "J1");
        assert_eq!(job.step_count(), 2);
        assert_eq!(job.total_duration(), 7);
    }

    #[test]
    fn test_into_operations_chains() {
        let ops = Job::new("J1")
            .with_step("M1", 3)
            .with_step("M2", 4)
            .with_step("M1", 1)
            .into_operations();

        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].key, "J1_1");
        assert!(ops[0].is_first());
        assert_eq!(ops[1].predecessors, vec!["J1_1"]);
        assert_eq!(ops[2].predecessors, vec!["J1_2"]);
        assert_eq!(ops[2].sequence, 2);
        assert_eq!(ops[2].machine, "M1");
        assert!(ops.iter().all(|o| o.job_id == "J1"));
    }

    #[test]
    fn test_empty_job() {
        let job = Job::new("empty");
        assert_eq!(job.total_duration(), 0);
        assert!(job.into_operations().is_empty());
    }

    #[test]
    fn test_operations_of_many_jobs() {
        let ops = operations_of(vec![
            Job::new("A").with_step("M1", 1),
            Job::new("B").with_step("M2", 2).with_step("M1", 2),
        ]);
        let keys: Vec<&str> = ops.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["A_1", "B_1", "B_2"]);
    }
}
