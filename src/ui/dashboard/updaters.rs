//! Dashboard update loop
//!
//! One invocation per frame. Each subsystem fires when its interval has
//! elapsed since it last fired; nothing here blocks.

use super::state::DashboardState;

use crate::audio::{Cue, play_quietly};
use crate::events::Event;
use crate::gadgets::log_rotator::{ANGEL_ALERT, LogEntry};
use crate::gadgets::telemetry::Telemetry;
use crate::scheduler::{FrameSource, Subsystem};

impl DashboardState {
    /// Run one frame at `now_ms` and return the subsystems that fired, in order.
    pub fn update(&mut self, now_ms: u64) -> Vec<Subsystem> {
        self.tick += 1;
        self.now_ms = now_ms;

        // The overlay's pending clear is checked on every frame, not on an interval
        if let Some(overlay) = self.hooks.overlay.as_mut() {
            overlay.sync(now_ms);
        }

        let mut fired = Vec::new();
        for subsystem in Subsystem::ALL {
            if self.gates.try_fire(subsystem, now_ms) {
                log::trace!("{} update at {}ms", subsystem, now_ms);
                match subsystem {
                    Subsystem::Data => self.update_data(now_ms),
                    Subsystem::Log => self.update_log(),
                    Subsystem::Radar => self.update_radar(now_ms),
                    Subsystem::Status => self.update_status(),
                }
                fired.push(subsystem);
            }
        }
        fired
    }

    /// Drive the loop until the frame source runs dry, calling `after_frame`
    /// once per frame. Returns the frame count.
    pub fn run_frames(
        &mut self,
        frames: &mut dyn FrameSource,
        mut after_frame: impl FnMut(&mut Self),
    ) -> usize {
        let mut count = 0;
        while let Some(now_ms) = frames.request_tick() {
            self.update(now_ms);
            after_frame(self);
            count += 1;
        }
        count
    }

    /// Telemetry readouts, waveform redraw and one heartbeat sample
    fn update_data(&mut self, now_ms: u64) {
        if self.hooks.readouts.is_some() {
            let telemetry = Telemetry::sample(&mut self.rng);
            self.hooks.readouts = Some(telemetry);
            self.add_event(Event::refresh(format!(
                "SYNC {} TEMP {}{} POWER {}",
                telemetry.format_sync_rate(),
                telemetry.format_core_temp(),
                if telemetry.temp_warning { " (HIGH)" } else { "" },
                telemetry.format_power()
            )));
        }

        if let Some(canvas) = self.hooks.canvas.as_mut() {
            canvas.redraw(now_ms, &self.wave);
        }

        if let Some(chart) = self.hooks.heartbeat.as_mut() {
            chart.feed(&mut self.rng);
        }
    }

    fn update_log(&mut self) {
        let Some(log) = self.hooks.log.as_mut() else {
            return;
        };
        let message = log.rotate(&mut self.rng);
        play_quietly(self.cues.as_mut(), Cue::Tick);
        self.add_event(Event::message(Subsystem::Log, message.to_string()));
    }

    fn update_radar(&mut self, now_ms: u64) {
        let Some(radar) = self.hooks.radar.as_mut() else {
            return;
        };
        let count = radar.sweep(&mut self.rng);
        if count == 0 {
            return;
        }

        if let Some(log) = self.hooks.log.as_mut() {
            log.prepend(LogEntry::now(ANGEL_ALERT));
        }
        if let Some(overlay) = self.hooks.overlay.as_mut() {
            overlay.trigger(now_ms);
        }
        play_quietly(self.cues.as_mut(), Cue::Alert);
        self.add_event(Event::alert(format!(
            "{} {} target(s) on radar",
            ANGEL_ALERT, count
        )));
    }

    fn update_status(&mut self) {
        let Some(status) = self.hooks.status.as_mut() else {
            return;
        };
        status.shuffle(&mut self.rng);
        let summary = status.summary();
        self.add_event(Event::state_change(summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioError, MockCueSink, Muted};
    use crate::config::{Config, Panels};
    use crate::events::EventType;
    use crate::scheduler::{Intervals, ScriptedFrames};
    use crate::ui::app::UIConfig;
    use mockall::predicate::eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(data: u64, log: u64, radar: u64, status: u64) -> Config {
        let mut config = Config::default();
        config.intervals = Intervals {
            data_ms: data,
            log_ms: log,
            radar_ms: radar,
            status_ms: status,
        };
        config
    }

    fn state(config: &Config) -> DashboardState {
        state_with_sink(config, Box::new(Muted))
    }

    fn state_with_sink(config: &Config, sink: Box<dyn crate::audio::CueSink>) -> DashboardState {
        DashboardState::new(
            config,
            UIConfig::new(false),
            StdRng::seed_from_u64(1234),
            sink,
        )
    }

    #[test]
    // Frames 0, 100, 100, 1500, 5000 with data/log/radar at 100/1500/5000 ms.
    fn scripted_frames_fire_each_subsystem_when_due() {
        let config = config(100, 1500, 5000, u64::MAX);
        let mut state = state(&config);

        let fired: Vec<(u64, Vec<Subsystem>)> = [0, 100, 100, 1500, 5000]
            .into_iter()
            .map(|t| (t, state.update(t)))
            .collect();

        assert_eq!(fired[0], (0, vec![]));
        assert_eq!(fired[1], (100, vec![Subsystem::Data]));
        assert_eq!(fired[2], (100, vec![]));
        assert_eq!(fired[3], (1500, vec![Subsystem::Data, Subsystem::Log]));
        assert_eq!(
            fired[4],
            (
                5000,
                vec![Subsystem::Data, Subsystem::Log, Subsystem::Radar]
            )
        );

        let count = |subsystem: Subsystem| {
            fired
                .iter()
                .filter(|(_, subsystems)| subsystems.contains(&subsystem))
                .count()
        };
        assert_eq!(count(Subsystem::Radar), 1);
        assert_eq!(count(Subsystem::Status), 0);
    }

    #[test]
    fn run_frames_consumes_source() {
        let config = config(100, 1500, 5000, u64::MAX);
        let mut state = state(&config);
        let mut frames = ScriptedFrames::new([0, 100, 100, 1500, 5000]);
        let mut drained = Vec::new();
        let count = state.run_frames(&mut frames, |state| {
            drained.push(state.drain_events().len());
        });
        assert_eq!(count, 5);
        // The radar only adds an event at 5000 when the sweep finds blips
        assert_eq!(drained[..4], [0, 1, 0, 2]);
        assert!(drained[4] >= 2);
        assert_eq!(state.tick, 5);
        assert_eq!(state.now_ms, 5000);
    }

    #[test]
    fn log_stays_capped_and_newest_first() {
        let config = config(u64::MAX, 10, 10, u64::MAX);
        let mut state = state(&config);
        for t in 1..=100 {
            state.update(t * 10);
            let log = state.hooks.log.as_ref().unwrap();
            assert!(log.len() <= 10);
        }
        let events = state.drain_events();
        let last_message = events
            .iter()
            .rev()
            .find(|e| e.event_type == EventType::Message)
            .unwrap();
        let newest = state.hooks.log.as_ref().unwrap().newest().unwrap();
        // A radar alert may land after the rotation in the same frame
        assert!(
            newest.message == last_message.msg || newest.message == ANGEL_ALERT,
            "{:?}",
            newest
        );
    }

    #[test]
    fn chart_grows_on_data_ticks_up_to_max() {
        let mut config = config(100, u64::MAX, u64::MAX, u64::MAX);
        config.heartbeat.max_points = 5;
        let mut state = state(&config);
        for t in 1..=12 {
            state.update(t * 100);
        }
        let chart = state.hooks.heartbeat.as_ref().unwrap();
        assert_eq!(chart.len(), 5);
        assert_eq!(chart.labels().count(), 5);
    }

    #[test]
    fn data_tick_redraws_canvas_and_readouts() {
        let config = config(100, u64::MAX, u64::MAX, u64::MAX);
        let mut state = state(&config);
        state.update(0);
        assert!(state.hooks.canvas.as_ref().unwrap().paths().is_empty());

        state.update(100);
        assert!(!state.hooks.canvas.as_ref().unwrap().paths().is_empty());
        let telemetry = state.hooks.readouts.unwrap();
        assert_eq!(telemetry.temp_warning, telemetry.core_temp > 86.0);
    }

    #[test]
    // Blips raise the overlay, which hides 3000 ms after the sweep that found them.
    fn radar_hit_raises_overlay_until_hold_expires() {
        let mut config = config(u64::MAX, u64::MAX, 4000, u64::MAX);
        config.radar.min_blips = 1;
        config.radar.max_blips = 4;
        let mut state = state(&config);

        state.update(4000);
        let count = state.hooks.radar.as_ref().unwrap().blips().len();
        assert!((1..=4).contains(&count));
        assert!(state.hooks.warning_visible());
        assert_eq!(
            state.hooks.log.as_ref().unwrap().newest().unwrap().message,
            ANGEL_ALERT
        );

        state.update(6999);
        assert!(state.hooks.warning_visible());
        state.update(7000);
        assert!(!state.hooks.warning_visible());

        // The next hit raises it again for a full hold
        state.update(8000);
        assert!(state.hooks.warning_visible());
        state.update(10_999);
        assert!(state.hooks.warning_visible());
        state.update(11_000);
        assert!(!state.hooks.warning_visible());
    }

    #[test]
    fn empty_sweep_leaves_overlay_down() {
        let mut config = config(u64::MAX, u64::MAX, 1000, u64::MAX);
        config.radar.min_blips = 0;
        config.radar.max_blips = 0;
        let mut state = state(&config);
        state.update(1000);
        assert!(!state.hooks.warning_visible());
        assert!(state.hooks.log.as_ref().unwrap().is_empty());
    }

    #[test]
    // Panels left out of the layout turn their updates into no-ops.
    fn missing_targets_are_skipped() {
        let mut config = config(100, 100, 100, 100);
        config.panels = Panels {
            readouts: false,
            waveform: false,
            heartbeat: false,
            log: false,
            radar: false,
            overlay: false,
            status: false,
        };
        let mut state = state(&config);
        let fired = state.update(100);
        assert_eq!(fired, Subsystem::ALL.to_vec());
        assert!(state.drain_events().is_empty());
        assert!(!state.hooks.warning_visible());
    }

    #[test]
    // Without an overlay target the radar still sweeps and logs.
    fn radar_without_overlay_still_logs() {
        let mut config = config(u64::MAX, u64::MAX, 100, u64::MAX);
        config.radar.min_blips = 2;
        config.radar.max_blips = 2;
        config.panels.overlay = false;
        let mut state = state(&config);
        state.update(100);
        assert_eq!(state.hooks.radar.as_ref().unwrap().blips().len(), 2);
        assert_eq!(state.hooks.log.as_ref().unwrap().len(), 1);
        assert!(!state.hooks.warning_visible());
    }

    #[test]
    fn status_tick_emits_state_change() {
        let config = config(u64::MAX, u64::MAX, u64::MAX, 500);
        let mut state = state(&config);
        state.update(500);
        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::StateChange);
        assert!(events[0].msg.starts_with("CODE "));
    }

    #[test]
    fn same_seed_same_session() {
        let config = config(100, 300, 700, 900);
        let mut a = state(&config);
        let mut b = state(&config);
        for t in (0..3000).step_by(50) {
            a.update(t);
            b.update(t);
        }
        assert_eq!(a.hooks.readouts, b.hooks.readouts);
        assert_eq!(a.hooks.status, b.hooks.status);
        assert_eq!(
            a.hooks.heartbeat.as_ref().unwrap().points(),
            b.hooks.heartbeat.as_ref().unwrap().points()
        );
    }

    #[test]
    // Audio failures never interrupt the loop.
    fn audio_errors_are_swallowed() {
        let mut sink = MockCueSink::new();
        sink.expect_play()
            .with(eq(Cue::Tick))
            .times(2)
            .returning(|_| Err(AudioError::Closed));

        let config = config(u64::MAX, 100, u64::MAX, u64::MAX);
        let mut state = state_with_sink(&config, Box::new(sink));
        state.update(100);
        state.update(200);
        assert_eq!(state.hooks.log.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn events_queue_is_capped() {
        let config = config(1, u64::MAX, u64::MAX, u64::MAX);
        let mut state = state(&config);
        for t in 1..=500 {
            state.update(t);
        }
        assert_eq!(state.drain_events().len(), 100);
        assert!(state.drain_events().is_empty());
    }
}
