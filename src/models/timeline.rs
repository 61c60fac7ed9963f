//! Execution timeline model.
//!
//! A timeline is the schedule a single processor followed: one event per
//! tick during which some process occupied the CPU. Idle ticks produce no
//! event. Events are strictly ordered by tick.
//!
//! Chart consumers usually want contiguous bars rather than unit events,
//! and a start marker drawn once per process; [`Timeline::segments`] and
//! [`Timeline::first_runs`] provide those views.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Tick;

/// One tick of processor occupancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Process that ran during this tick.
    pub pid: String,
    /// The tick, i.e. the interval `[time, time + 1)`.
    pub time: Tick,
}

/// A maximal run of consecutive ticks on the same process.
///
/// Covers the half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process that ran.
    pub pid: String,
    /// First tick of the run.
    pub start: Tick,
    /// One past the last tick of the run.
    pub end: Tick,
}

impl Segment {
    /// Number of ticks covered.
    #[inline]
    pub fn len(&self) -> Tick {
        self.end - self.start
    }

    /// Whether the segment covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Chronological sequence of [`TimelineEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<TimelineEvent>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    ///
    /// Callers append in increasing tick order; one processor means one
    /// event per tick at most.
    pub fn push(&mut self, pid: impl Into<String>, time: Tick) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.time < time),
            "timeline events must have strictly increasing ticks"
        );
        self.events.push(TimelineEvent {
            pid: pid.into(),
            time,
        });
    }

    /// All events in tick order.
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Number of events (busy ticks).
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no process ever ran.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Busy ticks, as a tick count.
    pub fn busy_ticks(&self) -> Tick {
        self.events.len() as Tick
    }

    /// Ticks at which `pid` ran, in order.
    pub fn events_for(&self, pid: &str) -> Vec<Tick> {
        self.events
            .iter()
            .filter(|e| e.pid == pid)
            .map(|e| e.time)
            .collect()
    }

    /// One past the last busy tick (0 for an empty timeline).
    pub fn makespan(&self) -> Tick {
        self.events.last().map_or(0, |e| e.time + 1)
    }

    /// Merges consecutive same-process events on adjacent ticks.
    ///
    /// An idle gap splits a segment even when the same process resumes
    /// afterwards.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for event in &self.events {
            match segments.last_mut() {
                Some(seg) if seg.pid == event.pid && seg.end == event.time => {
                    seg.end += 1;
                }
                _ => segments.push(Segment {
                    pid: event.pid.clone(),
                    start: event.time,
                    end: event.time + 1,
                }),
            }
        }
        segments
    }

    /// First tick at which each process ran, once per process, in order
    /// of first execution.
    pub fn first_runs(&self) -> Vec<(&str, Tick)> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter(|e| seen.insert(e.pid.as_str()))
            .map(|e| (e.pid.as_str(), e.time))
            .collect()
    }

    /// Number of times the processor switched directly from one process to
    /// a different one.
    ///
    /// Transitions across an idle gap are not counted.
    pub fn context_switches(&self) -> usize {
        self.events
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid && w[0].time + 1 == w[1].time)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEvent;
    type IntoIter = std::slice::Iter<'a, TimelineEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
