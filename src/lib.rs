//! Preemptive CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a single processor under Shortest Remaining Time Next (SRTN)
//! and derives per-process timing metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineEvent`,
//!   `Segment`, `ProcessMetrics`, `MetricsReport`
//! - **`validation`**: Input integrity checks (empty/duplicate IDs, negative
//!   arrivals, non-positive bursts)
//! - **`scheduler`**: The SRTN simulation loop and the metrics calculator
//! - **`workload`**: JSON / text-table loading and seeded random workloads
//!
//! # Example
//!
//! ```
//! use u_srtn::models::Process;
//! use u_srtn::scheduler::SrtnScheduler;
//!
//! let processes = vec![
//!     Process::new("P1").with_arrival(0).with_burst(5),
//!     Process::new("P2").with_arrival(1).with_burst(3),
//! ];
//! let sim = SrtnScheduler::new().simulate_validated(&processes)?;
//! let report = sim.metrics(&processes)?;
//! assert_eq!(report.avg_waiting, 1.5);
//! assert_eq!(report.avg_turnaround, 5.5);
//! # Ok::<(), u_srtn::Error>(())
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
