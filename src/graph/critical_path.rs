//! Critical path (longest duration-weighted chain).
//!
//! # Algorithm
//! Dynamic programming over a topological order:
//! `finish[v] = max(finish[p] for p in pred(v)) + duration[v]`,
//! then backtrack from the node with the largest finish.
//!
//! # Tie-breaking
//! Whenever several candidates share the maximum (end node or predecessor),
//! the one whose operation key sorts first wins. The path length does not
//! depend on this choice; only the node sequence does.
//!
//! # Complexity
//! O(V + E).

use super::PrecedenceGraph;
use crate::models::CriticalPath;

/// Computes the critical path of an acyclic precedence graph.
///
/// Returns an empty path of length 0 for an empty graph. Chain lengths
/// saturate at `i64::MAX`.
pub fn critical_path(graph: &PrecedenceGraph) -> CriticalPath {
    let n = graph.len();
    if n == 0 {
        return CriticalPath::default();
    }

    let mut finish = vec![0i64; n];
    let mut best_pred: Vec<Option<usize>> = vec![None; n];

    for &v in graph.topological_order() {
        let mut earliest_start = 0;
        for &p in graph.predecessors(v) {
            // Predecessors are ascending by key, so strict `>` keeps the first maximum.
            if best_pred[v].is_none() || finish[p] > earliest_start {
                earliest_start = finish[p];
                best_pred[v] = Some(p);
            }
        }
        finish[v] = earliest_start.saturating_add(graph.operation(v).duration);
    }

    let mut end = 0;
    for v in 1..n {
        if finish[v] > finish[end] {
            end = v;
        }
    }

    let mut path = vec![end];
    let mut current = end;
    while let Some(p) = best_pred[current] {
        path.push(p);
        current = p;
    }
    path.reverse();

    CriticalPath {
        operations: path
            .into_iter()
            .map(|i| graph.operation(i).key.clone())
            .collect(),
        length: finish[end],
    }
}
