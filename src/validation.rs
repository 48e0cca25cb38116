//! Input validation for job-shop problems.
//!
//! Strict structural checks a caller can run before scheduling. The
//! scheduler itself is more permissive (it drops dangling predecessor
//! references), so this is where data-entry mistakes surface. Detects:
//! - Empty or duplicate operation keys
//! - Negative durations
//! - Machines outside the declared machine set
//! - Predecessor references to unknown operations
//! - Circular precedence dependencies

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::graph::PrecedenceGraph;
use crate::models::Operation;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two operations share the same key.
    DuplicateId,
    /// An operation has an empty key.
    EmptyKey,
    /// An operation has a negative duration.
    NegativeDuration,
    /// An operation names a machine outside the declared set.
    InvalidMachineReference,
    /// An operation references a predecessor that doesn't exist.
    InvalidPredecessor,
    /// Precedence graph contains a cycle.
    CyclicDependency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a set of operations.
///
/// `machines` is the declared machine set; pass an empty slice to skip the
/// machine check. Empty machine ids resolve through `config` first.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_operations(
    operations: &[Operation],
    machines: &[String],
    config: &SchedulerConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut keys = HashSet::new();
    for op in operations {
        if op.key.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyKey,
                format!("Operation of job '{}' has an empty key", op.job_id),
            ));
        }
        if !keys.insert(op.key.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate operation key: {}", op.key),
            ));
        }
        if op.duration < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeDuration,
                format!("Operation '{}' has negative duration {}", op.key, op.duration),
            ));
        }
    }

    if !machines.is_empty() {
        let known: HashSet<&str> = machines.iter().map(String::as_str).collect();
        for op in operations {
            let machine = config.machine_for(&op.machine);
            if !known.contains(machine) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidMachineReference,
                    format!("Operation '{}' references unknown machine '{}'", op.key, machine),
                ));
            }
        }
    }

    for op in operations {
        for pred in &op.predecessors {
            if !keys.contains(pred.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidPredecessor,
                    format!(
                        "Operation '{}' references unknown predecessor '{}'",
                        op.key, pred
                    ),
                ));
            }
        }
    }

    // Duplicates are already reported; only a clean key set can be ordered.
    if !errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::DuplicateId)
    {
        let quiet = config.clone().with_dangling_warnings(false);
        if let Err(ScheduleError::CircularDependency { operations: stuck }) =
            PrecedenceGraph::build_with(operations, &quiet)
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!(
                    "Circular dependency detected involving operations: {}",
                    stuck.join(", ")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{operations_of, Job};

    fn machines() -> Vec<String> {
        vec!["M1".into(), "M2".into()]
    }

    fn sample_operations() -> Vec<Operation> {
        operations_of(vec![
            Job::new("J1").with_step("M1", 3).with_step("M2", 2),
            Job::new("J2").with_step("M2", 4),
        ])
    }

    fn kinds(ops: &[Operation]) -> Vec<ValidationErrorKind> {
        validate_operations(ops, &machines(), &SchedulerConfig::default())
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        let ops = sample_operations();
        assert!(validate_operations(&ops, &machines(), &SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_key() {
        let mut ops = sample_operations();
        ops.push(ops[0].clone());
        assert!(kinds(&ops).contains(&ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_empty_key() {
        let ops = vec![Operation::new("", "J1", 0).on_machine("M1")];
        assert!(kinds(&ops).contains(&ValidationErrorKind::EmptyKey));
    }

    #[test]
    fn test_negative_duration() {
        let ops = vec![Operation::new("A", "A", 0).with_duration(-1).on_machine("M1")];
        assert_eq!(kinds(&ops), vec![ValidationErrorKind::NegativeDuration]);
    }

    #[test]
    fn test_unknown_machine() {
        let ops = vec![Operation::new("A", "A", 0).on_machine("M7")];
        assert_eq!(kinds(&ops), vec![ValidationErrorKind::InvalidMachineReference]);
    }

    #[test]
    fn test_machine_check_skipped_without_set() {
        let ops = vec![Operation::new("A", "A", 0).on_machine("M7")];
        assert!(validate_operations(&ops, &[], &SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_machine_resolves_to_default() {
        let ops = vec![Operation::new("A", "A", 0)];
        assert!(validate_operations(&ops, &machines(), &SchedulerConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_predecessor() {
        let ops = vec![Operation::new("A", "A", 0)
            .on_machine("M1")
            .with_predecessor("NONEXISTENT")];
        assert_eq!(kinds(&ops), vec![ValidationErrorKind::InvalidPredecessor]);
    }

    #[test]
    fn test_cyclic_dependency() {
        // A → B → C → A
        let ops = vec![
            Operation::new("A", "J", 0).on_machine("M1").with_predecessor("C"),
            Operation::new("B", "J", 1).on_machine("M1").with_predecessor("A"),
            Operation::new("C", "J", 2).on_machine("M1").with_predecessor("B"),
        ];
        let errors =
            validate_operations(&ops, &machines(), &SchedulerConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::CyclicDependency);
        assert!(errors[0].message.contains("A, B, C"));
    }

    #[test]
    fn test_multiple_errors() {
        let ops = vec![
            Operation::new("A", "A", 0).with_duration(-5).on_machine("UNKNOWN"),
            Operation::new("B", "B", 0).on_machine("M1").with_predecessor("GHOST"),
        ];
        let errors = kinds(&ops);
        assert_eq!(errors.len(), 3);
    }
}
