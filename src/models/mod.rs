//! Scheduling domain models.
//!
//! Provides the data types for single-processor CPU scheduling runs:
//! the immutable process definitions that go in, and the timeline and
//! metrics that come out.
//!
//! # Domain Mappings
//!
//! | u-srtn | Operating Systems | Batch Processing |
//! |--------|-------------------|------------------|
//! | Process | Process/Thread | Job |
//! | TimelineEvent | CPU tick | Machine slot |
//! | ProcessMetrics | Turnaround/Waiting | Flow time/Delay |

mod metrics;
mod process;
mod timeline;

pub use metrics::{MetricsReport, ProcessMetrics};
pub use process::{Process, Tick};
pub use timeline::{Segment, Timeline, TimelineEvent};
