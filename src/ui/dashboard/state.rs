//! Dashboard state management
//!
//! Contains the dashboard state struct and the presentation targets it owns

use crate::audio::{CueSink, stop_quietly};
use crate::buffer::EvictingBuffer;
use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::events::Event;
use crate::gadgets::heartbeat::HeartbeatChart;
use crate::gadgets::log_rotator::LogBuffer;
use crate::gadgets::radar::RadarScope;
use crate::gadgets::status::StatusBoard;
use crate::gadgets::telemetry::Telemetry;
use crate::gadgets::warning::WarningOverlay;
use crate::gadgets::waveform::{Sketch, WaveParams};
use crate::scheduler::IntervalGates;
use crate::ui::app::UIConfig;

use rand::rngs::StdRng;
use std::time::Instant;

/// Presentation targets. A `None` target was left out of the layout; updates
/// aimed at it are skipped.
#[derive(Debug, Clone)]
pub struct Hooks {
    pub readouts: Option<Telemetry>,
    pub canvas: Option<Sketch>,
    pub heartbeat: Option<HeartbeatChart>,
    pub log: Option<LogBuffer>,
    pub radar: Option<RadarScope>,
    pub overlay: Option<WarningOverlay>,
    pub status: Option<StatusBoard>,
}

impl Hooks {
    pub fn from_config(config: &Config) -> Self {
        let panels = &config.panels;
        Self {
            readouts: panels.readouts.then(Telemetry::default),
            canvas: panels
                .waveform
                .then(|| Sketch::new(config.waveform.width, config.waveform.height)),
            heartbeat: panels.heartbeat.then(|| {
                HeartbeatChart::new(config.heartbeat.max_points, config.heartbeat.policy)
            }),
            log: panels.log.then(LogBuffer::new),
            radar: panels
                .radar
                .then(|| RadarScope::new(config.radar.min_blips, config.radar.max_blips)),
            overlay: panels
                .overlay
                .then(|| WarningOverlay::new(config.radar.warning_hold_ms)),
            status: panels.status.then(StatusBoard::new),
        }
    }

    /// Whether the warning overlay is currently up.
    pub fn warning_visible(&self) -> bool {
        self.overlay.as_ref().is_some_and(WarningOverlay::is_visible)
    }
}

/// Everything the update loop reads and writes, owned by the loop.
pub struct DashboardState {
    /// Presentation targets written by the subsystem updates.
    pub hooks: Hooks,
    /// The start time of the dashboard, used for computing uptime.
    pub start_time: Instant,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Number of loop invocations so far
    pub tick: usize,
    /// Timestamp of the latest loop invocation
    pub now_ms: u64,

    /// Recently fired updates, oldest first
    pub(super) events: EvictingBuffer<Event>,
    pub(super) gates: IntervalGates,
    pub(super) wave: WaveParams,
    pub(super) rng: StdRng,
    pub(super) cues: Box<dyn CueSink>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(config: &Config, ui_config: UIConfig, rng: StdRng, cues: Box<dyn CueSink>) -> Self {
        Self {
            hooks: Hooks::from_config(config),
            start_time: Instant::now(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            now_ms: 0,
            events: EvictingBuffer::new(EVENT_QUEUE_SIZE),
            gates: IntervalGates::new(config.intervals),
            wave: WaveParams {
                speed: config.waveform.speed,
                ..WaveParams::default()
            },
            rng,
            cues,
        }
    }

    /// Record a fired update, dropping the oldest record when full
    pub fn add_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Take every recorded event, oldest first
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }

    /// Stop any sounding cue, e.g. when the terminal loses focus.
    pub fn silence(&mut self) {
        stop_quietly(self.cues.as_mut());
    }
}
