//! Process list sources.
//!
//! Loads process definitions from JSON or from a whitespace-separated text
//! table, and generates reproducible random workloads.
//!
//! # Text table format
//!
//! ```text
//! # id  arrival  burst
//! P1    0        5
//! P2    1        3
//! ```
//!
//! Blank lines and `#` comments are ignored.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Process, Tick};

/// Parses a JSON array of `{"id", "arrival", "burst"}` objects.
pub fn from_json(input: &str) -> Result<Vec<Process>> {
    Ok(serde_json::from_str(input)?)
}

/// Parses one `id arrival burst` row per line.
pub fn from_table(input: &str) -> Result<Vec<Process>> {
    let mut processes = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let parse_err = |reason: String| Error::Parse {
            line: idx + 1,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [id, arrival, burst] = fields.as_slice() else {
            return Err(parse_err(format!(
                "expected 'id arrival burst', found {} field(s)",
                fields.len()
            )));
        };

        let arrival: Tick = arrival
            .parse()
            .map_err(|e| parse_err(format!("invalid arrival '{arrival}': {e}")))?;
        let burst: Tick = burst
            .parse()
            .map_err(|e| parse_err(format!("invalid burst '{burst}': {e}")))?;

        processes.push(Process {
            id: id.to_string(),
            arrival,
            burst,
        });
    }

    Ok(processes)
}

/// Parameters for random workload generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: Tick,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: Tick,
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: Tick) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst.
    pub fn with_max_burst(mut self, max_burst: Tick) -> Self {
        self.max_burst = max_burst;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Generates `config.count` valid processes named `P1..Pn`.
///
/// Ranges are clamped so the result always passes validation
/// (arrival `>= 0`, burst `>= 1`). Output depends only on the RNG state.
pub fn random_processes<R: Rng + ?Sized>(rng: &mut R, config: &WorkloadConfig) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let max_burst = config.max_burst.max(1);

    (1..=config.count)
        .map(|i| Process {
            id: format!("P{i}"),
            arrival: rng.random_range(0..=max_arrival),
            burst: rng.random_range(1..=max_burst),
        })
        .collect()
}
