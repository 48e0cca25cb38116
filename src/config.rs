//! Scheduler configuration.

use serde::{Deserialize, Serialize};

/// Configuration for graph building and dispatch.
///
/// Deserializable with every field optional, so a host application can keep
/// it in a JSON or TOML file next to its datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Time at which every machine becomes free.
    pub start_time: i64,
    /// Machine used for operations with an empty machine id.
    pub default_machine: String,
    /// Emit a warning for each predecessor reference that names no operation.
    pub warn_on_dangling_predecessors: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_time: 0,
            default_machine: "M1".to_string(),
            warn_on_dangling_predecessors: true,
        }
    }
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schedule start time.
    pub fn with_start_time(mut self, start_time: i64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the fallback machine.
    pub fn with_default_machine(mut self, machine: impl Into<String>) -> Self {
        self.default_machine = machine.into();
        self
    }

    /// Enables or disables dangling-predecessor warnings.
    pub fn with_dangling_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_dangling_predecessors = enabled;
        self
    }

    /// Resolves an operation's machine, falling back to `default_machine`.
    pub fn machine_for<'a>(&'a self, machine: &'a str) -> &'a str {
        if machine.is_empty() {
            &self.default_machine
        } else {
            machine
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.start_time, 0);
        assert_eq!(cfg.default_machine, "M1");
        assert!(cfg.warn_on_dangling_predecessors);
    }

    #[test]
    fn test_builder() {
        let cfg = SchedulerConfig::new()
            .with_start_time(100)
            .with_default_machine("CNC")
            .with_dangling_warnings(false);
        assert_eq!(cfg.start_time, 100);
        assert_eq!(cfg.machine_for(""), "CNC");
        assert_eq!(cfg.machine_for("M4"), "M4");
        assert!(!cfg.warn_on_dangling_predecessors);
    }

    #[test]
    fn test_partial_json() {
        let cfg: SchedulerConfig = serde_json::from_str(r#"{"start_time": 8}"#).unwrap();
        assert_eq!(cfg.start_time, 8);
        assert_eq!(cfg.default_machine, "M1");
        assert!(cfg.warn_on_dangling_predecessors);
    }
}
