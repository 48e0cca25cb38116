//! Operation model.
//!
//! An operation is the atomic unit of work in a job shop. It belongs to a job,
//! occupies exactly one machine for a fixed duration, and may have to wait for
//! other operations to finish first.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use serde::{Deserialize, Serialize};

/// An operation (one step of a job) to be scheduled.
///
/// Operations of the same job are linked by precedence: each one names the
/// operation that must complete before it may start. Across jobs, the only
/// interaction is contention for shared machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Unique operation key, conventionally `<job>_<position>`.
    pub key: String,
    /// Parent job identifier.
    pub job_id: String,
    /// Position within the job (0-indexed).
    pub sequence: u32,
    /// Processing time (time units, non-negative).
    pub duration: i64,
    /// Machine this operation must occupy.
    pub machine: String,
    /// Keys of operations that must finish before this one starts.
    pub predecessors: Vec<String>,
}

impl Operation {
    /// Creates a new operation.
    pub fn new(key: impl Into<String>, job_id: impl Into<String>, sequence: u32) -> Self {
        Self {
            key: key.into(),
            job_id: job_id.into(),
            sequence,
            duration: 0,
            machine: String::new(),
            predecessors: Vec::new(),
        }
    }

    /// Sets the processing duration.
    pub fn with_duration(mut self, duration: i64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the machine.
    pub fn on_machine(mut self, machine: impl Into<String>) -> Self {
        self.machine = machine.into();
        self
    }

    /// Adds a predecessor operation key.
    pub fn with_predecessor(mut self, predecessor: impl Into<String>) -> Self {
        self.predecessors.push(predecessor.into());
        self
    }

    /// Whether this operation has no precedence constraints.
    pub fn is_first(&self) -> bool {
        self.predecessors.is_empty()
    }
}

/// Map-style description of an operation, keyed externally by operation key.
///
/// Mirrors the shape produced by dataset parsers: duration, machine and
/// at most one predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSpec {
    /// Processing time.
    pub duration: i64,
    /// Machine identifier.
    pub machine: String,
    /// Optional predecessor key.
    #[serde(default)]
    pub predecessor: Option<String>,
}

impl OperationSpec {
    /// Creates a spec without a predecessor.
    pub fn new(duration: i64, machine: impl Into<String>) -> Self {
        Self {
            duration,
            machine: machine.into(),
            predecessor: None,
        }
    }

    /// Sets the predecessor key.
    pub fn after(mut self, predecessor: impl Into<String>) -> Self {
        self.predecessor = Some(predecessor.into());
        self
    }

    /// Converts into an [`Operation`] with the given key.
    ///
    /// The job is taken from the key prefix before the last `_`
    /// (`J1_T2` → `J1`); keys without `_` are their own job. The position is
    /// read from the 1-based number ending the suffix (`J1_T2` → 1) and is 0
    /// when the suffix carries none.
    pub fn into_operation(self, key: impl Into<String>) -> Operation {
        let key = key.into();
        let (job_id, sequence) = match key.rsplit_once('_') {
            Some((job, suffix)) => (job.to_string(), position_of(suffix)),
            None => (key.clone(), 0),
        };
        Operation {
            key,
            job_id,
            sequence,
            duration: self.duration,
            machine: self.machine,
            predecessors: self.predecessor.into_iter().collect(),
        }
    }
}

/// Zero-based position from a 1-based suffix such as `T3` or `3`.
fn position_of(suffix: &str) -> u32 {
    let digits = suffix.trim_start_matches(|c: char| !c.is_ascii_digit());
    digits
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_builder() {
        let op = Operation::new("J1_2", "J1", 1)
            .with_duration(40)
            .on_machine("M3")
            .with_predecessor("J1_1");

        assert_eq!(op.key, "J1_2");
        assert_eq!(op.job_id, "J1");
        assert_eq!(op.sequence, 1);
        assert_eq!(op.duration, 40);
        assert_eq!(op.machine, "M3");
        assert_eq!(op.predecessors, vec!["J1_1"]);
        assert!(!op.is_first());
    }

    #[test]
    fn test_operation_defaults() {
        let op = Operation::new("J1_1", "J1", 0);
        assert_eq!(op.duration, 0);
        assert!(op.machine.is_empty());
        assert!(op.is_first());
    }

    #[test]
    fn test_spec_into_operation() {
        let op = OperationSpec::new(7, "M2").after("J3_T1").into_operation("J3_T2");
        assert_eq!(op.key, "J3_T2");
        assert_eq!(op.job_id, "J3");
        assert_eq!(op.duration, 7);
        assert_eq!(op.machine, "M2");
        assert_eq!(op.predecessors, vec!["J3_T1"]);
    }

    #[test]
    fn test_spec_sequence_from_key() {
        let op = OperationSpec::new(1, "M1").into_operation("J1_T2");
        assert_eq!(op.sequence, 1);
        let op = OperationSpec::new(1, "M1").into_operation("J4_3");
        assert_eq!(op.sequence, 2);
        let op = OperationSpec::new(1, "M1").into_operation("J4_first");
        assert_eq!(op.sequence, 0);
    }

    #[test]
    fn test_spec_key_without_separator() {
        let op = OperationSpec::new(1, "M1").into_operation("solo");
        assert_eq!(op.job_id, "solo");
        assert!(op.is_first());
    }

    #[test]
    fn test_spec_deserialize_without_predecessor() {
        let spec: OperationSpec =
            serde_json::from_str(r#"{"duration": 3, "machine": "M1"}"#).unwrap();
        assert_eq!(spec, OperationSpec::new(3, "M1"));
    }
}
