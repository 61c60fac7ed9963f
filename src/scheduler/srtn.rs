//! Preemptive Shortest Remaining Time Next scheduler.
//!
//! # Algorithm
//!
//! 1. Stably sort processes by arrival; position in this order is the
//!    tie-break rank.
//! 2. At each tick `t`, among processes with `arrival <= t` and work left,
//!    run the one with least remaining time (lowest rank on ties).
//! 3. If none is ready the tick is idle and emits no event.
//! 4. Stop once every process has finished.
//!
//! The clock advances by exactly one per iteration, busy or idle, so a run
//! takes at most `max(arrival) + sum(burst)` iterations.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

use super::compute_metrics;
use super::ready::{ReadyQueue, ReadyQueueKind, Slot};
use crate::error::Result;
use crate::models::{MetricsReport, Process, Tick, Timeline};
use crate::validation::validate_processes;

/// Output of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simulation {
    /// One event per busy tick, in tick order.
    pub timeline: Timeline,
    /// Process that ran at each busy tick (parallel to `timeline`).
    pub execution_order: Vec<String>,
    /// First tick each process ran.
    pub start: BTreeMap<String, Tick>,
    /// One past the last tick each process ran.
    pub finish: BTreeMap<String, Tick>,
    /// Total simulated ticks, busy and idle.
    pub ticks: Tick,
}

impl Simulation {
    /// Computes per-process metrics for this run.
    pub fn metrics(&self, processes: &[Process]) -> Result<MetricsReport> {
        compute_metrics(processes, &self.finish, &self.start)
    }

    /// Ticks on which no process ran.
    pub fn idle_ticks(&self) -> Tick {
        self.ticks - self.timeline.busy_ticks()
    }
}

/// Preemptive SRTN scheduler for a single processor.
///
/// # Example
///
/// ```
/// use u_srtn::models::Process;
/// use u_srtn::scheduler::SrtnScheduler;
///
/// let processes = vec![
///     Process::new("P1").with_arrival(0).with_burst(5),
///     Process::new("P2").with_arrival(1).with_burst(3),
/// ];
/// let sim = SrtnScheduler::new().simulate(&processes);
/// assert_eq!(sim.execution_order, ["P1", "P2", "P2", "P2", "P1", "P1", "P1", "P1"]);
/// assert_eq!(sim.finish["P1"], 8);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SrtnScheduler {
    ready_queue: ReadyQueueKind,
}

impl SrtnScheduler {
    /// Creates a scheduler using the scanning ready set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ready-set strategy.
    pub fn with_ready_queue(mut self, kind: ReadyQueueKind) -> Self {
        self.ready_queue = kind;
        self
    }

    /// The configured ready-set strategy.
    pub fn ready_queue(&self) -> ReadyQueueKind {
        self.ready_queue
    }

    /// Validates `processes`, then simulates them.
    ///
    /// Fails with [`Error::InvalidInput`](crate::Error::InvalidInput)
    /// before any tick runs.
    pub fn simulate_validated(&self, processes: &[Process]) -> Result<Simulation> {
        validate_processes(processes)?;
        Ok(self.simulate(processes))
    }

    /// Runs the simulation to completion.
    ///
    /// Assumes validated input: unique non-empty IDs, `arrival >= 0`,
    /// `burst > 0`.
    pub fn simulate(&self, processes: &[Process]) -> Simulation {
        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by_key(|p| p.arrival);

        let mut slots: Vec<Slot> = order.iter().map(|p| Slot::new(p)).collect();
        let mut queue = ReadyQueue::new(self.ready_queue, slots.len());

        let mut timeline = Timeline::new();
        let mut execution_order = Vec::new();
        let mut running: Option<usize> = None;
        let mut completed = 0;
        let mut t: Tick = 0;

        while completed < slots.len() {
            let Some(rank) = queue.select(&slots, t) else {
                trace!(t, "idle");
                running = None;
                t += 1;
                continue;
            };

            let pid = &order[rank].id;
            if running != Some(rank) {
                match running {
                    Some(prev) if slots[prev].finish.is_none() => debug!(
                        t,
                        pid = %pid,
                        preempted = %order[prev].id,
                        remaining = slots[rank].remaining,
                        "preempt"
                    ),
                    _ => debug!(t, pid = %pid, remaining = slots[rank].remaining, "dispatch"),
                }
                running = Some(rank);
            }

            timeline.push(pid.as_str(), t);
            execution_order.push(pid.clone());

            let slot = &mut slots[rank];
            slot.start.get_or_insert(t);
            slot.remaining -= 1;
            if slot.remaining == 0 {
                slot.finish = Some(t + 1);
                completed += 1;
                debug!(t = t + 1, pid = %pid, "finish");
            }
            queue.requeue(&slots, rank);

            t += 1;
        }

        let mut start = BTreeMap::new();
        let mut finish = BTreeMap::new();
        for (p, slot) in order.iter().zip(&slots) {
            if let Some(s) = slot.start {
                start.insert(p.id.clone(), s);
            }
            if let Some(f) = slot.finish {
                finish.insert(p.id.clone(), f);
            }
        }

        info!(
            processes = slots.len(),
            ticks = t,
            context_switches = timeline.context_switches(),
            "simulation complete"
        );

        Simulation {
            timeline,
            execution_order,
            start,
            finish,
            ticks: t,
        }
    }
}

/// Simulates `processes` with the default scheduler.
///
/// Shorthand for `SrtnScheduler::new().simulate(processes)`.
pub fn simulate(processes: &[Process]) -> Simulation {
    SrtnScheduler::new().simulate(processes)
}
