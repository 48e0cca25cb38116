//! Greedy list scheduler (SPT dispatch).
//!
//! # Algorithm
//!
//! Repeated passes until every operation is placed:
//!
//! 1. Ready set = unscheduled operations whose predecessors are all scheduled.
//! 2. Order it by the dispatching rule (SPT), ties by operation key.
//! 3. Commit each ready operation in that order:
//!    `start = max(machine free time, latest predecessor finish)`.
//!    The machine's free time advances immediately, so later operations
//!    of the same pass see it.
//! 4. Operations unlocked during a pass wait for the next pass.
//!
//! # Complexity
//! O(P * V log V) where P = number of passes (≤ longest chain length).
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::config::SchedulerConfig;
use crate::dispatching::{order_ready, rules, DispatchingRule};
use crate::error::ScheduleError;
use crate::graph::{critical_path, PrecedenceGraph};
use crate::models::{CriticalPath, Operation, OperationSpec, Schedule, ScheduleEntry};

/// Input container for scheduling.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Operations to schedule (unique keys).
    pub operations: Vec<Operation>,
    /// Known machines. Empty = derive from the operations.
    pub machines: Vec<String>,
    /// Scheduler configuration.
    pub config: SchedulerConfig,
}

impl ScheduleRequest {
    /// Creates a request over the given operations.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations,
            machines: Vec::new(),
            config: SchedulerConfig::default(),
        }
    }

    /// Creates a request from a key → spec mapping.
    pub fn from_map(specs: BTreeMap<String, OperationSpec>) -> Self {
        Self::new(
            specs
                .into_iter()
                .map(|(key, spec)| spec.into_operation(key))
                .collect(),
        )
    }

    /// Sets the machine set.
    pub fn with_machines<I, S>(mut self, machines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.machines = machines.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of a successful scheduling call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// Entries in commit order.
    pub schedule: Schedule,
    /// Longest precedence chain.
    pub critical_path: CriticalPath,
    /// Time at which every machine became free.
    pub start_time: i64,
}

impl ScheduleOutcome {
    /// Makespan of the schedule (absolute finish time).
    pub fn makespan(&self) -> i64 {
        self.schedule.makespan()
    }

    /// Elapsed time from `start_time` to the makespan.
    ///
    /// Zero for an empty schedule.
    pub fn span(&self) -> i64 {
        if self.schedule.is_empty() {
            0
        } else {
            self.makespan().saturating_sub(self.start_time)
        }
    }
}

/// Greedy list scheduler.
///
/// # Example
///
/// ```
/// use u_jobshop::models::{operations_of, Job};
/// use u_jobshop::scheduler::ListScheduler;
///
/// let ops = operations_of(vec![
///     Job::new("J1").with_step("M1", 3),
///     Job::new("J2").with_step("M2", 5),
/// ]);
/// let outcome = ListScheduler::new().schedule(&ops, &[]).unwrap();
/// assert_eq!(outcome.makespan(), 5);
/// assert_eq!(outcome.critical_path.length, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ListScheduler {
    config: SchedulerConfig,
    rule: Arc<dyn DispatchingRule>,
}

impl ListScheduler {
    /// Creates a scheduler with SPT dispatch and default configuration.
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
            rule: Arc::new(rules::Spt),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the dispatching rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Arc::new(rule);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Builds the precedence graph and schedules it.
    ///
    /// Durations are taken as given; run
    /// [`validate_operations`](crate::validation::validate_operations) first
    /// to reject negative values.
    ///
    /// # Errors
    /// [`ScheduleError::CircularDependency`] for cyclic input,
    /// [`ScheduleError::DuplicateOperation`] for repeated keys,
    /// [`ScheduleError::TimeOverflow`] if a finish time exceeds `i64`.
    pub fn schedule(
        &self,
        operations: &[Operation],
        machines: &[String],
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let graph = PrecedenceGraph::build_with(operations, &self.config)?;
        self.schedule_graph(&graph, machines)
    }

    /// Schedules from a request, using the request's configuration.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let scheduler = Self {
            config: request.config.clone(),
            rule: Arc::clone(&self.rule),
        };
        scheduler.schedule(&request.operations, &request.machines)
    }

    /// Computes the critical path and dispatches every operation of `graph`.
    pub fn schedule_graph(
        &self,
        graph: &PrecedenceGraph,
        machines: &[String],
    ) -> Result<ScheduleOutcome, ScheduleError> {
        let critical_path = critical_path(graph);
        let schedule = self.dispatch(graph, machines, &critical_path)?;

        tracing::info!(
            operations = graph.len(),
            makespan = schedule.makespan(),
            critical_length = critical_path.length,
            rule = self.rule.name(),
            "schedule complete"
        );

        Ok(ScheduleOutcome {
            schedule,
            critical_path,
            start_time: self.config.start_time,
        })
    }

    fn dispatch(
        &self,
        graph: &PrecedenceGraph,
        machines: &[String],
        critical_path: &CriticalPath,
    ) -> Result<Schedule, ScheduleError> {
        let start_time = self.config.start_time;
        let n = graph.len();

        let known = if machines.is_empty() {
            graph.machines(&self.config)
        } else {
            machines.to_vec()
        };
        let mut machine_free: HashMap<String, i64> =
            known.into_iter().map(|m| (m, start_time)).collect();

        let mut finish: Vec<Option<i64>> = vec![None; n];
        let mut scheduled = 0;
        let mut schedule = Schedule::new();

        while scheduled < n {
            let mut ready: Vec<usize> = (0..n)
                .filter(|&i| {
                    finish[i].is_none()
                        && graph.predecessors(i).iter().all(|&p| finish[p].is_some())
                })
                .collect();

            if ready.is_empty() {
                return Err(ScheduleError::NoReadyOperations {
                    remaining: n - scheduled,
                });
            }

            order_ready(self.rule.as_ref(), graph, &mut ready);

            for i in ready {
                let op = graph.operation(i);
                let machine = self.config.machine_for(&op.machine);

                let pred_finish = graph
                    .predecessors(i)
                    .iter()
                    .filter_map(|&p| finish[p])
                    .max()
                    .unwrap_or(start_time);

                let free = machine_free
                    .entry(machine.to_string())
                    .or_insert(start_time);
                let start = (*free).max(pred_finish);
                let end = start
                    .checked_add(op.duration)
                    .ok_or_else(|| ScheduleError::TimeOverflow {
                        operation: op.key.clone(),
                    })?;
                *free = end;

                finish[i] = Some(end);
                scheduled += 1;

                tracing::debug!(operation = %op.key, machine, start, end, "dispatched");

                schedule.add_entry(
                    ScheduleEntry::new(machine, &op.key, &op.job_id, start, end)
                        .with_critical(critical_path.contains(&op.key)),
                );
            }
        }

        Ok(schedule)
    }
}

impl Default for ListScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedules a validated graph with SPT dispatch and default configuration.
pub fn schedule(
    graph: &PrecedenceGraph,
    machines: &[String],
) -> Result<ScheduleOutcome, ScheduleError> {
    ListScheduler::new().schedule_graph(graph, machines)
}
