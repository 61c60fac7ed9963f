//! Metrics calculator.
//!
//! Derives per-process timing metrics from a completed run and the input
//! process definitions.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | finish - arrival |
//! | Waiting | turnaround - burst |
//! | Response | start - arrival |
//! | Avg * | total / n, one division |

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{MetricsReport, Process, ProcessMetrics, Tick};

/// Computes metrics for every process.
///
/// Rows follow the stable arrival order of `processes`.
///
/// # Arguments
/// * `processes` - The input processes (arrival and burst).
/// * `finish` - Finish tick per process ID.
/// * `start` - First-run tick per process ID.
///
/// # Errors
/// [`Error::IncompleteSimulation`] if any process lacks a start or finish
/// entry.
pub fn compute_metrics(
    processes: &[Process],
    finish: &BTreeMap<String, Tick>,
    start: &BTreeMap<String, Tick>,
) -> Result<MetricsReport> {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival);

    let rows = order
        .into_iter()
        .map(|p| {
            let (Some(&s), Some(&f)) = (start.get(&p.id), finish.get(&p.id)) else {
                return Err(Error::IncompleteSimulation { pid: p.id.clone() });
            };
            Ok(ProcessMetrics::new(p.id.clone(), p.arrival, p.burst, s, f))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MetricsReport::from_rows(rows))
}
