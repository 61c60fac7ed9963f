//! Ready-set selection strategies.
//!
//! Both strategies pick the arrived, unfinished process with the least
//! remaining time. Ties go to the lower *rank*, the process's position in
//! the stable arrival order (earliest arrival, then earliest input row).
//!
//! | Strategy | Per-tick cost | Notes |
//! |----------|---------------|-------|
//! | `Scan` | O(n) | Re-filters every process each tick |
//! | `Heap` | O(log n) | Min-heap on `(remaining, rank)`, arrivals pushed once |

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Process, Tick};

/// Which ready-set structure the scheduler uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyQueueKind {
    /// Linear scan of all processes every tick.
    #[default]
    Scan,
    /// Binary min-heap keyed by remaining time, then rank.
    Heap,
}

/// Per-process mutable state, indexed by rank.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub arrival: Tick,
    pub remaining: Tick,
    pub start: Option<Tick>,
    pub finish: Option<Tick>,
}

impl Slot {
    pub(crate) fn new(process: &Process) -> Self {
        Self {
            arrival: process.arrival,
            remaining: process.burst,
            start: None,
            finish: None,
        }
    }

    #[inline]
    fn is_ready(&self, t: Tick) -> bool {
        self.arrival <= t && self.remaining > 0
    }
}

/// Selects the process to run at each tick.
///
/// `slots` is ordered by rank. `select` is called once per tick with
/// strictly increasing `t`; after it returns `Some(rank)` the caller
/// decrements that slot and then calls [`ReadyQueue::requeue`].
pub(crate) enum ReadyQueue {
    Scan,
    Heap {
        heap: BinaryHeap<Reverse<(Tick, usize)>>,
        next_arrival: usize,
    },
}

impl ReadyQueue {
    pub(crate) fn new(kind: ReadyQueueKind, n: usize) -> Self {
        match kind {
            ReadyQueueKind::Scan => ReadyQueue::Scan,
            ReadyQueueKind::Heap => ReadyQueue::Heap {
                heap: BinaryHeap::with_capacity(n),
                next_arrival: 0,
            },
        }
    }

    pub(crate) fn select(&mut self, slots: &[Slot], t: Tick) -> Option<usize> {
        match self {
            ReadyQueue::Scan => {
                let mut best: Option<usize> = None;
                for (rank, slot) in slots.iter().enumerate() {
                    if !slot.is_ready(t) {
                        continue;
                    }
                    // Strict `<` keeps the earliest rank on ties.
                    match best {
                        Some(b) if slots[b].remaining <= slot.remaining => {}
                        _ => best = Some(rank),
                    }
                }
                best
            }
            ReadyQueue::Heap { heap, next_arrival } => {
                // Slots are sorted by arrival, so arrivals form a prefix.
                while *next_arrival < slots.len() && slots[*next_arrival].arrival <= t {
                    heap.push(Reverse((slots[*next_arrival].remaining, *next_arrival)));
                    *next_arrival += 1;
                }
                heap.pop().map(|Reverse((_, rank))| rank)
            }
        }
    }

    pub(crate) fn requeue(&mut self, slots: &[Slot], rank: usize) {
        if let ReadyQueue::Heap { heap, .. } = self {
            let remaining = slots[rank].remaining;
            if remaining > 0 {
                heap.push(Reverse((remaining, rank)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(defs: &[(Tick, Tick)]) -> Vec<Slot> {
        defs.iter()
            .map(|&(arrival, burst)| {
                Slot::new(&Process::new("p").with_arrival(arrival).with_burst(burst))
            })
            .collect()
    }

    #[test]
    fn test_scan_picks_least_remaining() {
        let s = slots(&[(0, 5), (0, 2), (0, 3)]);
        let mut q = ReadyQueue::new(ReadyQueueKind::Scan, s.len());
        assert_eq!(q.select(&s, 0), Some(1));
    }

    #[test]
    fn test_tie_goes_to_lower_rank() {
        let s = slots(&[(0, 3), (0, 3)]);
        for kind in [ReadyQueueKind::Scan, ReadyQueueKind::Heap] {
            let mut q = ReadyQueue::new(kind, s.len());
            assert_eq!(q.select(&s, 0), Some(0), "{kind:?}");
        }
    }

    #[test]
    fn test_not_yet_arrived_is_skipped() {
        let s = slots(&[(0, 5), (2, 1)]);
        for kind in [ReadyQueueKind::Scan, ReadyQueueKind::Heap] {
            let mut q = ReadyQueue::new(kind, s.len());
            assert_eq!(q.select(&s, 0), Some(0), "{kind:?}");
        }
    }

    #[test]
    fn test_idle_when_nothing_arrived() {
        let s = slots(&[(3, 1)]);
        for kind in [ReadyQueueKind::Scan, ReadyQueueKind::Heap] {
            let mut q = ReadyQueue::new(kind, s.len());
            assert_eq!(q.select(&s, 0), None, "{kind:?}");
        }
    }

    #[test]
    fn test_heap_requeue_drops_finished() {
        let mut s = slots(&[(0, 1)]);
        let mut q = ReadyQueue::new(ReadyQueueKind::Heap, s.len());
        let rank = q.select(&s, 0).unwrap();
        s[rank].remaining -= 1;
        q.requeue(&s, rank);
        assert_eq!(q.select(&s, 1), None);
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&ReadyQueueKind::Heap).unwrap(), r#""heap""#);
        let kind: ReadyQueueKind = serde_json::from_str(r#""scan""#).unwrap();
        assert_eq!(kind, ReadyQueueKind::Scan);
    }
}
