//! Job-per-line dataset parser (Taillard/OR-Library layout).
//!
//! ```text
//! 2 3
//! 0 3 1 2 2 2
//! 1 4 0 1
//! ```
//!
//! The header holds the job and machine counts. Each following line is one
//! job: alternating `machine duration` pairs in processing order. Job `i`
//! (1-based) becomes operations `J{i}_T1`, `J{i}_T2`, ... on machines
//! `M{machine}`, each depending on the one before it.
//!
//! Malformed job lines are skipped with a warning; the rest of the dataset
//! is kept.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::Operation;

/// Errors that make a whole dataset unreadable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No header line.
    #[error("Dataset is empty")]
    EmptyInput,
    /// The header does not start with a job count.
    #[error("Invalid header line: {0:?}")]
    InvalidHeader(String),
}

/// Parses a dataset into chained operations.
///
/// At most `num_jobs` job lines (from the header) are read; blank lines
/// still consume a job number.
pub fn parse_taillard(content: &str) -> Result<Vec<Operation>, ParseError> {
    let mut lines = content.trim().lines();
    let header = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or(ParseError::EmptyInput)?;

    let num_jobs: usize = header
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| ParseError::InvalidHeader(header.trim().to_string()))?;

    let mut operations = Vec::new();
    for (i, line) in lines.take(num_jobs).enumerate() {
        let job_id = format!("J{}", i + 1);
        match parse_job_line(&job_id, line) {
            Some(ops) => operations.extend(ops),
            None => {
                tracing::warn!(job = %job_id, line = line.trim(), "skipping malformed job line")
            }
        }
    }

    tracing::debug!(jobs = num_jobs, operations = operations.len(), "dataset parsed");
    Ok(operations)
}

fn parse_job_line(job_id: &str, line: &str) -> Option<Vec<Operation>> {
    let values: Vec<i64> = line
        .split_whitespace()
        .map(|t| t.parse().ok())
        .collect::<Option<_>>()?;

    if values.len() % 2 != 0 || values.iter().any(|&v| v < 0) {
        return None;
    }

    let ops = values
        .chunks_exact(2)
        .enumerate()
        .map(|(k, pair)| {
            let op = Operation::new(format!("{job_id}_T{}", k + 1), job_id, k as u32)
                .with_duration(pair[1])
                .on_machine(format!("M{}", pair[0]));
            if k > 0 {
                op.with_predecessor(format!("{job_id}_T{k}"))
            } else {
                op
            }
        })
        .collect();
    Some(ops)
}

/// Distinct machine ids referenced by `operations`, sorted.
pub fn machines_of(operations: &[Operation]) -> Vec<String> {
    operations
        .iter()
        .map(|op| op.machine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
