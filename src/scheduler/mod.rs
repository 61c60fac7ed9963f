//! SRTN simulation and metrics.
//!
//! # Algorithm
//!
//! `SrtnScheduler` steps a single processor one tick at a time, always
//! running the arrived process with the least remaining work. A newly
//! arrived shorter process preempts the running one.
//!
//! # Metrics
//!
//! `compute_metrics` turns a run's start/finish ticks into turnaround,
//! waiting, and response times, plus their means.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Schrage (1968), "A Proof of the Optimality of the Shortest Remaining
//!   Processing Time Discipline"

mod metrics;
mod ready;
mod srtn;

pub use metrics::compute_metrics;
pub use ready::ReadyQueueKind;
pub use srtn::{simulate, Simulation, SrtnScheduler};
