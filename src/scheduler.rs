//! Frame scheduling for the dashboard update loop
//!
//! The loop never owns timers. It is handed one timestamp per frame by a
//! [`FrameSource`] and asks [`IntervalGates`] which subsystems are due.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

use crate::consts::cli_consts::intervals;

/// The independently paced parts of the dashboard, in firing order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Subsystem {
    /// Telemetry readouts, waveform redraw and heartbeat sample
    Data,
    Log,
    Radar,
    Status,
}

impl Subsystem {
    pub const ALL: [Subsystem; 4] = [
        Subsystem::Data,
        Subsystem::Log,
        Subsystem::Radar,
        Subsystem::Status,
    ];

    fn index(self) -> usize {
        match self {
            Subsystem::Data => 0,
            Subsystem::Log => 1,
            Subsystem::Radar => 2,
            Subsystem::Status => 3,
        }
    }
}

/// Minimum elapsed time between two updates of each subsystem, in milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Intervals {
    pub data_ms: u64,
    pub log_ms: u64,
    pub radar_ms: u64,
    pub status_ms: u64,
}

impl Default for Intervals {
    fn default() -> Self {
        Self {
            data_ms: intervals::DATA_MS,
            log_ms: intervals::LOG_MS,
            radar_ms: intervals::RADAR_MS,
            status_ms: intervals::STATUS_MS,
        }
    }
}

impl Intervals {
    pub fn of(&self, subsystem: Subsystem) -> u64 {
        match subsystem {
            Subsystem::Data => self.data_ms,
            Subsystem::Log => self.log_ms,
            Subsystem::Radar => self.radar_ms,
            Subsystem::Status => self.status_ms,
        }
    }
}

/// Last fire time per subsystem.
///
/// Every subsystem starts at 0, so the first frame is the baseline and each
/// subsystem fires on the first frame at least one interval past it.
#[derive(Debug, Clone)]
pub struct IntervalGates {
    intervals: Intervals,
    last_fired: [u64; 4],
}

impl IntervalGates {
    pub fn new(intervals: Intervals) -> Self {
        Self {
            intervals,
            last_fired: [0; 4],
        }
    }

    /// Returns true and records `now` when the subsystem's interval has elapsed.
    pub fn try_fire(&mut self, subsystem: Subsystem, now_ms: u64) -> bool {
        let slot = &mut self.last_fired[subsystem.index()];
        if now_ms.saturating_sub(*slot) >= self.intervals.of(subsystem) {
            *slot = now_ms;
            true
        } else {
            false
        }
    }
}

/// Hands the update loop the timestamp of its next frame.
///
/// `None` means the host is gone and the loop should stop.
pub trait FrameSource {
    fn request_tick(&mut self) -> Option<u64>;
}

/// Milliseconds elapsed since the source was created.
#[derive(Debug, Clone)]
pub struct MonotonicFrames {
    origin: Instant,
    stop_after_ms: Option<u64>,
}

impl MonotonicFrames {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            stop_after_ms: None,
        }
    }

    /// Stop yielding frames once this much time has passed.
    pub fn with_limit(mut self, stop_after_ms: Option<u64>) -> Self {
        self.stop_after_ms = stop_after_ms;
        self
    }
}

impl Default for MonotonicFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for MonotonicFrames {
    fn request_tick(&mut self) -> Option<u64> {
        let now = self.origin.elapsed().as_millis() as u64;
        match self.stop_after_ms {
            Some(limit) if now > limit => None,
            _ => Some(now),
        }
    }
}

/// Replays a fixed list of timestamps.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    frames: VecDeque<u64>,
}

impl ScriptedFrames {
    pub fn new(frames: impl IntoIterator<Item = u64>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl FrameSource for ScriptedFrames {
    fn request_tick(&mut self) -> Option<u64> {
        self.frames.pop_front()
    }
}
