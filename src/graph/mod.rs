//! Precedence graph over operations.
//!
//! Converts a flat operation list into a directed graph (edge A→B means A
//! must finish before B starts) and verifies that it is acyclic.
//!
//! # Algorithm
//!
//! 1. One node per operation, indexed in key order.
//! 2. One edge per predecessor reference whose target exists. Dangling
//!    references are dropped and recorded, never fatal.
//! 3. Kahn's topological sort. Nodes left with unresolved in-degree form
//!    (or hang off) a cycle, and the build fails with
//!    [`ScheduleError::CircularDependency`].
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks", CACM 5(11)

mod critical_path;

pub use critical_path::critical_path;

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, HashMap};

use crate::config::SchedulerConfig;
use crate::error::ScheduleError;
use crate::models::Operation;

/// A predecessor reference that named no known operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEdge {
    /// Operation holding the reference.
    pub operation: String,
    /// The missing predecessor key.
    pub missing_predecessor: String,
}

/// Validated, acyclic precedence graph.
///
/// Immutable once built. Node indices follow ascending operation key order,
/// so every traversal over indices is deterministic.
#[derive(Debug, Clone)]
pub struct PrecedenceGraph {
    operations: Vec<Operation>,
    index: HashMap<String, usize>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    topological_order: Vec<usize>,
    dropped_edges: Vec<DroppedEdge>,
}

impl PrecedenceGraph {
    /// Builds the graph with the default configuration.
    pub fn build(operations: &[Operation]) -> Result<Self, ScheduleError> {
        Self::build_with(operations, &SchedulerConfig::default())
    }

    /// Builds the graph and verifies it is acyclic.
    ///
    /// # Errors
    /// - [`ScheduleError::DuplicateOperation`] if two operations share a key.
    /// - [`ScheduleError::CircularDependency`] if the precedence relation has a cycle.
    pub fn build_with(
        operations: &[Operation],
        config: &SchedulerConfig,
    ) -> Result<Self, ScheduleError> {
        let mut sorted: Vec<Operation> = operations.to_vec();
        sorted.sort_by(|a, b| a.key.cmp(&b.key));

        let mut index = HashMap::with_capacity(sorted.len());
        for (i, op) in sorted.iter().enumerate() {
            if index.insert(op.key.clone(), i).is_some() {
                return Err(ScheduleError::DuplicateOperation(op.key.clone()));
            }
        }

        let n = sorted.len();
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut dropped_edges = Vec::new();

        for (i, op) in sorted.iter().enumerate() {
            for pred in &op.predecessors {
                match index.get(pred) {
                    Some(&p) => {
                        if !predecessors[i].contains(&p) {
                            predecessors[i].push(p);
                            successors[p].push(i);
                        }
                    }
                    None => {
                        if config.warn_on_dangling_predecessors {
                            tracing::warn!(
                                operation = %op.key,
                                predecessor = %pred,
                                "dropping precedence edge to unknown operation"
                            );
                        }
                        dropped_edges.push(DroppedEdge {
                            operation: op.key.clone(),
                            missing_predecessor: pred.clone(),
                        });
                    }
                }
            }
        }

        for list in predecessors.iter_mut().chain(successors.iter_mut()) {
            list.sort_unstable();
        }

        let topological_order = topological_sort(&predecessors, &successors).map_err(|stuck| {
            ScheduleError::CircularDependency {
                operations: stuck.into_iter().map(|i| sorted[i].key.clone()).collect(),
            }
        })?;

        Ok(Self {
            operations: sorted,
            index,
            predecessors,
            successors,
            topological_order,
            dropped_edges,
        })
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the graph has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operation at node `i`.
    pub fn operation(&self, i: usize) -> &Operation {
        &self.operations[i]
    }

    /// All operations in key order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Node index of an operation key.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Predecessor node indices of `i`, ascending.
    pub fn predecessors(&self, i: usize) -> &[usize] {
        &self.predecessors[i]
    }

    /// Successor node indices of `i`, ascending.
    pub fn successors(&self, i: usize) -> &[usize] {
        &self.successors[i]
    }

    /// Node indices in a topological order (smallest key first among ready nodes).
    pub fn topological_order(&self) -> &[usize] {
        &self.topological_order
    }

    /// Number of precedence edges.
    pub fn edge_count(&self) -> usize {
        self.predecessors.iter().map(Vec::len).sum()
    }

    /// Predecessor references dropped because their target was missing.
    pub fn dropped_edges(&self) -> &[DroppedEdge] {
        &self.dropped_edges
    }

    /// Distinct machine ids referenced by the operations, sorted.
    ///
    /// Empty machine ids are resolved through `config`.
    pub fn machines(&self, config: &SchedulerConfig) -> Vec<String> {
        self.operations
            .iter()
            .map(|op| config.machine_for(&op.machine).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Kahn's algorithm with a min-heap so ties resolve by node index.
///
/// Returns the unresolved nodes (ascending) when a cycle blocks progress.
fn topological_sort(
    predecessors: &[Vec<usize>],
    successors: &[Vec<usize>],
) -> Result<Vec<usize>, Vec<usize>> {
    let n = predecessors.len();
    let mut in_degree: Vec<usize> = predecessors.iter().map(Vec::len).collect();
    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for &next in &successors[node] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    if order.len() == n {
        Ok(order)
    } else {
        Err((0..n).filter(|&i| in_degree[i] > 0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn op(key: &str, duration: i64, machine: &str) -> Operation {
        Operation::new(key, key, 0)
            .with_duration(duration)
            .on_machine(machine)
    }

    #[test]
    fn test_build_chain() {
        let ops = Job::new("J1")
            .with_step("M1", 2)
            .with_step("M2", 4)
            .into_operations();
        let g = PrecedenceGraph::build(&ops).unwrap();

        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 1);
        let first = g.index_of("J1_1").unwrap();
        let second = g.index_of("J1_2").unwrap();
        assert_eq!(g.predecessors(second), &[first]);
        assert_eq!(g.successors(first), &[second]);
        assert_eq!(g.topological_order(), &[first, second]);
    }

    #[test]
    fn test_nodes_in_key_order() {
        let ops = vec![op("C", 1, "M1"), op("A", 1, "M1"), op("B", 1, "M1")];
        let g = PrecedenceGraph::build(&ops).unwrap();
        let keys: Vec<&str> = g.operations().iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dangling_predecessor_dropped() {
        let ops = vec![op("A", 1, "M1").with_predecessor("GHOST")];
        let g = PrecedenceGraph::build(&ops).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert_eq!(
            g.dropped_edges(),
            &[DroppedEdge {
                operation: "A".into(),
                missing_predecessor: "GHOST".into(),
            }]
        );
    }

    #[test]
    fn test_dangling_silent_when_disabled() {
        let ops = vec![op("A", 1, "M1").with_predecessor("GHOST")];
        let cfg = SchedulerConfig::default().with_dangling_warnings(false);
        let g = PrecedenceGraph::build_with(&ops, &cfg).unwrap();
        assert_eq!(g.dropped_edges().len(), 1);
    }

    #[test]
    fn test_two_cycle_rejected() {
        let ops = vec![
            op("A", 1, "M1").with_predecessor("B"),
            op("B", 1, "M1").with_predecessor("A"),
        ];
        let err = PrecedenceGraph::build(&ops).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::CircularDependency {
                operations: vec!["A".into(), "B".into()]
            }
        );
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_self_loop_rejected() {
        let ops = vec![op("A", 1, "M1").with_predecessor("A")];
        assert!(PrecedenceGraph::build(&ops).unwrap_err().is_infeasible());
    }

    #[test]
    fn test_cycle_reports_downstream_nodes() {
        // X → A ⇄ B → Y: X resolves, A, B and Y stay blocked.
        let ops = vec![
            op("X", 1, "M1"),
            op("A", 1, "M1").with_predecessor("X").with_predecessor("B"),
            op("B", 1, "M1").with_predecessor("A"),
            op("Y", 1, "M1").with_predecessor("B"),
        ];
        match PrecedenceGraph::build(&ops) {
            Err(ScheduleError::CircularDependency { operations }) => {
                assert_eq!(operations, vec!["A", "B", "Y"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let ops = vec![op("A", 1, "M1"), op("A", 2, "M2")];
        assert_eq!(
            PrecedenceGraph::build(&ops).unwrap_err(),
            ScheduleError::DuplicateOperation("A".into())
        );
    }

    #[test]
    fn test_repeated_predecessor_single_edge() {
        let ops = vec![
            op("A", 1, "M1"),
            op("B", 1, "M1").with_predecessor("A").with_predecessor("A"),
        ];
        let g = PrecedenceGraph::build(&ops).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let g = PrecedenceGraph::build(&[]).unwrap();
        assert!(g.is_empty());
        assert!(g.topological_order().is_empty());
    }

    #[test]
    fn test_machines_resolved() {
        let ops = vec![op("A", 1, "M2"), op("B", 1, ""), op("C", 1, "M2")];
        let g = PrecedenceGraph::build(&ops).unwrap();
        assert_eq!(g.machines(&SchedulerConfig::default()), vec!["M1", "M2"]);
    }
}
