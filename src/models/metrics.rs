//! Per-process timing metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//!
//! Per-process values are exact integers. Aggregate means are computed
//! from exact integer totals with a single division.

use serde::{Deserialize, Serialize};

use super::Tick;

/// Timing metrics for one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: String,
    /// Arrival tick.
    pub arrival: Tick,
    /// Burst length.
    pub burst: Tick,
    /// First tick the process ran.
    pub start: Tick,
    /// One past the last tick the process ran.
    pub finish: Tick,
    /// finish - arrival.
    pub turnaround: Tick,
    /// turnaround - burst.
    pub waiting: Tick,
    /// start - arrival.
    pub response: Tick,
}

impl ProcessMetrics {
    /// Derives metrics from a process definition and its observed start
    /// and finish ticks.
    pub fn new(
        id: impl Into<String>,
        arrival: Tick,
        burst: Tick,
        start: Tick,
        finish: Tick,
    ) -> Self {
        let turnaround = finish - arrival;
        Self {
            id: id.into(),
            arrival,
            burst,
            start,
            finish,
            turnaround,
            waiting: turnaround - burst,
            response: start - arrival,
        }
    }
}

/// Metrics for a whole run: one row per process plus aggregates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Rows in stable arrival order.
    pub processes: Vec<ProcessMetrics>,
    /// Sum of turnaround times.
    pub total_turnaround: Tick,
    /// Sum of waiting times.
    pub total_waiting: Tick,
    /// Sum of response times.
    pub total_response: Tick,
    /// Mean turnaround (0.0 when empty).
    pub avg_turnaround: f64,
    /// Mean waiting time (0.0 when empty).
    pub avg_waiting: f64,
    /// Mean response time (0.0 when empty).
    pub avg_response: f64,
}

impl MetricsReport {
    /// Builds a report from rows, computing totals and means.
    pub fn from_rows(processes: Vec<ProcessMetrics>) -> Self {
        let total_turnaround: Tick = processes.iter().map(|m| m.turnaround).sum();
        let total_waiting: Tick = processes.iter().map(|m| m.waiting).sum();
        let total_response: Tick = processes.iter().map(|m| m.response).sum();
        let n = processes.len();

        Self {
            avg_turnaround: mean(total_turnaround, n),
            avg_waiting: mean(total_waiting, n),
            avg_response: mean(total_response, n),
            processes,
            total_turnaround,
            total_waiting,
            total_response,
        }
    }

    /// Looks up the row for a process.
    pub fn get(&self, pid: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.id == pid)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Latest finish tick (0 when empty).
    pub fn makespan(&self) -> Tick {
        self.processes.iter().map(|m| m.finish).max().unwrap_or(0)
    }

    /// Fraction of the makespan the processor was busy (0.0..=1.0).
    pub fn cpu_utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        let busy: Tick = self.processes.iter().map(|m| m.burst).sum();
        busy as f64 / makespan as f64
    }
}

fn mean(total: Tick, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        total as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_metrics_derivation() {
        let m = ProcessMetrics::new("P1", 0, 5, 0, 8);
        assert_eq!(m.turnaround, 8);
        assert_eq!(m.waiting, 3);
        assert_eq!(m.response, 0);

        let m = ProcessMetrics::new("P2", 3, 1, 6, 7);
        assert_eq!(m.turnaround, 4);
        assert_eq!(m.waiting, 3);
        assert_eq!(m.response, 3);
    }

    #[test]
    fn test_report_averages() {
        let report = MetricsReport::from_rows(vec![
            ProcessMetrics::new("P1", 0, 5, 0, 8),
            ProcessMetrics::new("P2", 1, 3, 1, 4),
        ]);
        assert_eq!(report.total_turnaround, 11);
        assert_eq!(report.total_waiting, 3);
        assert!((report.avg_turnaround - 5.5).abs() < 1e-10);
        assert!((report.avg_waiting - 1.5).abs() < 1e-10);
        assert!((report.avg_response - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_report_mean_is_single_division() {
        // turnaround 1, 2, 3
        let rows = (0..3)
            .map(|i| ProcessMetrics::new(format!("P{i}"), 0, 1, i, i + 1))
            .collect();
        let report = MetricsReport::from_rows(rows);
        assert_eq!(report.total_turnaround, 6);
        assert_eq!(report.avg_turnaround, 2.0);
        assert_eq!(report.avg_waiting, 1.0);
    }

    #[test]
    fn test_report_lookup_and_utilization() {
        let report = MetricsReport::from_rows(vec![
            ProcessMetrics::new("P1", 0, 1, 0, 1),
            ProcessMetrics::new("P2", 3, 1, 3, 4),
        ]);
        assert_eq!(report.get("P2").map(|m| m.start), Some(3));
        assert!(report.get("P3").is_none());
        assert_eq!(report.makespan(), 4);
        assert!((report.cpu_utilization() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_report() {
        let report = MetricsReport::from_rows(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.makespan(), 0);
        assert_eq!(report.avg_turnaround, 0.0);
        assert_eq!(report.avg_waiting, 0.0);
        assert_eq!(report.cpu_utilization(), 0.0);
    }
}
