//! Process (job) model.
//!
//! A process is a unit of CPU work with a known arrival tick and a known
//! total execution requirement (burst). Processes are immutable inputs:
//! the scheduler reads them, it never mutates them.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// Discrete simulation time, in whole ticks relative to t=0.
pub type Tick = i64;

/// A process to be scheduled on the single simulated processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique, non-empty process identifier.
    pub id: String,
    /// Tick at which the process becomes ready.
    pub arrival: Tick,
    /// Total processor ticks the process needs.
    pub burst: Tick,
}

impl Process {
    /// Creates a process arriving at t=0 with a one-tick burst.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            arrival: 0,
            burst: 1,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: Tick) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst length.
    pub fn with_burst(mut self, burst: Tick) -> Self {
        self.burst = burst;
        self
    }

    /// Whether the process has arrived by tick `t`.
    #[inline]
    pub fn has_arrived(&self, t: Tick) -> bool {
        self.arrival <= t
    }
}

impl From<(&str, Tick, Tick)> for Process {
    fn from((id, arrival, burst): (&str, Tick, Tick)) -> Self {
        Self {
            id: id.to_string(),
            arrival,
            burst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1").with_arrival(3).with_burst(5);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 5);
    }

    #[test]
    fn test_process_from_tuple() {
        let p = Process::from(("P2", 1, 4));
        assert_eq!(p, Process::new("P2").with_arrival(1).with_burst(4));
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1").with_arrival(2);
        assert!(!p.has_arrived(1));
        assert!(p.has_arrived(2));
        assert!(p.has_arrived(7));
    }

    #[test]
    fn test_process_json_shape() {
        let p: Process = serde_json::from_str(r#"{"id":"A","arrival":0,"burst":3}"#).unwrap();
        assert_eq!(p, Process::from(("A", 0, 3)));
    }
}
