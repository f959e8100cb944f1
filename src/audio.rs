//! Audio cues for dashboard and MAGI events.
//!
//! Cues are fire-and-forget: a sink may fail (no terminal, closed output) and
//! callers drop the error after logging it.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Cue {
    /// Short click on every status log line
    Tick,
    /// Alarm raised with the warning overlay
    Alert,
    /// Plain tone of the given pitch and length
    Tone { hz: u32, millis: u64 },
    /// Continuous carrier gated by a square wave oscillator
    Carrier { hz: u32, lfo_hz: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Audio output failed: {0}")]
    Io(#[from] io::Error),

    #[error("Audio output is closed")]
    Closed,
}

#[cfg_attr(test, mockall::automock)]
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;

    /// Silence everything still sounding.
    fn stop_all(&mut self) -> Result<(), AudioError>;
}

/// Rings the terminal bell for every cue.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: Option<W>,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out: Some(out) }
    }
}

impl<W: Write> CueSink for TerminalBell<W> {
    // The bell has one pitch and length, so every cue sounds the same and a
    // carrier only marks its start.
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        let out = self.out.as_mut().ok_or(AudioError::Closed)?;
        let rung = out.write_all(b"\x07").and_then(|()| out.flush());
        if rung.is_err() {
            // A broken output stays broken; stop writing to it
            self.out = None;
        }
        rung.map_err(AudioError::from)
    }

    fn stop_all(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Sink used when sound is disabled.
#[derive(Debug, Default)]
pub struct Muted;

impl CueSink for Muted {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop_all(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Build the sink for the current session.
pub fn sink_for(sound: bool) -> Box<dyn CueSink> {
    if sound {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Muted)
    }
}

/// Play a cue, dropping any playback failure.
pub fn play_quietly(sink: &mut dyn CueSink, cue: Cue) {
    if let Err(e) = sink.play(cue) {
        log::debug!("Dropped {} cue: {}", cue, e);
    }
}

/// Stop all cues, dropping any failure.
pub fn stop_quietly(sink: &mut dyn CueSink) {
    if let Err(e) = sink.stop_all() {
        log::debug!("Failed to stop cues: {}", e);
    }
}
