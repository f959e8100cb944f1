//! MAGI voting toy.
//!
//! A two-state toggle with a random outcome. Entering `Voting` draws the
//! verdict, which stays hidden until the toggle settles on `Voted`.

use crate::audio::{Cue, CueSink, play_quietly, stop_quietly};
use crate::consts::cli_consts::magi::*;
use rand::Rng;
use rand::rngs::StdRng;

pub const UNIT_NAMES: [&str; 3] = ["MELCHIOR-1", "BALTHASAR-2", "CASPER-3"];
const CASPER: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Voting,
    Voted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    Resolve,
    Reject,
}

pub struct Magi {
    phase: Phase,
    units: [Verdict; 3],
    verdict: Verdict,
    threshold: u32,
    priority: &'static str,
    ex_mode: bool,
    sound: bool,
    code: u16,
    file: String,
    loading: bool,
    /// First frame seen while loading
    loading_since: Option<u64>,
    rng: StdRng,
    cues: Box<dyn CueSink>,
}

impl Magi {
    pub fn new(threshold: u32, file: String, mut rng: StdRng, cues: Box<dyn CueSink>) -> Self {
        let code = rng.gen_range(100..700);
        Self {
            phase: Phase::Idle,
            units: [Verdict::Resolve; 3],
            verdict: Verdict::Resolve,
            threshold,
            priority: DEFAULT_PRIORITY,
            ex_mode: false,
            sound: true,
            code,
            file,
            loading: true,
            loading_since: None,
            rng,
            cues,
        }
    }

    /// Leave the loading state once its time is up, counted from the first
    /// frame this screen receives.
    pub fn update(&mut self, now_ms: u64) {
        if !self.loading {
            return;
        }
        let since = *self.loading_since.get_or_insert(now_ms);
        if now_ms.saturating_sub(since) >= LOADING_MS {
            self.loading = false;
        }
    }

    /// Flip between voting and voted, drawing a new verdict on every vote.
    pub fn toggle(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Voting => Phase::Voted,
            Phase::Idle | Phase::Voted => Phase::Voting,
        };

        if self.sound {
            stop_quietly(self.cues.as_mut());
            let cue = match self.phase {
                Phase::Voted => Cue::Tone {
                    hz: if self.verdict == Verdict::Reject {
                        REJECT_TONE_HZ
                    } else {
                        RESOLVE_TONE_HZ
                    },
                    millis: TONE_MS,
                },
                _ => Cue::Carrier {
                    hz: CARRIER_HZ,
                    lfo_hz: if self.ex_mode { LFO_EX_MODE_HZ } else { LFO_HZ },
                },
            };
            play_quietly(self.cues.as_mut(), cue);
        }

        if self.phase == Phase::Voting {
            self.cast_votes();
        }
        self.phase
    }

    fn cast_votes(&mut self) {
        let threshold = self.threshold as f64;
        let reject = self.rng.r#gen::<f64>() * 100.0 > threshold;

        self.units = [Verdict::Resolve; 3];
        if reject {
            if self.rng.gen_bool(0.5) {
                self.units[CASPER] = Verdict::Reject;
            } else {
                let dissenter = self.rng.gen_range(0..self.units.len());
                self.units[dissenter] = Verdict::Reject;
                for unit in self.units.iter_mut() {
                    if self.rng.r#gen::<f64>() * 100.0 > threshold {
                        *unit = Verdict::Reject;
                    }
                }
            }
        }
        self.verdict = if reject {
            Verdict::Reject
        } else {
            Verdict::Resolve
        };
        self.code = self.rng.gen_range(100..700);
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Advance to the next threshold; an unknown value restarts the cycle.
    pub fn cycle_threshold(&mut self) -> u32 {
        self.threshold = next_in_cycle(&THRESHOLDS, &self.threshold);
        self.threshold
    }

    pub fn cycle_priority(&mut self) -> &'static str {
        self.priority = next_in_cycle(&PRIORITIES, &self.priority);
        self.priority
    }

    pub fn toggle_ex_mode(&mut self) -> bool {
        self.ex_mode = !self.ex_mode;
        self.ex_mode
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound = !self.sound;
        if !self.sound {
            stop_quietly(self.cues.as_mut());
        }
        self.sound
    }

    /// Stop everything still sounding, e.g. when the terminal loses focus.
    pub fn silence(&mut self) {
        stop_quietly(self.cues.as_mut());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The final verdict, only once the vote has settled.
    pub fn verdict(&self) -> Option<Verdict> {
        (self.phase == Phase::Voted).then_some(self.verdict)
    }

    /// Per-unit verdicts, only once the vote has settled.
    pub fn unit_verdicts(&self) -> Option<[Verdict; 3]> {
        (self.phase == Phase::Voted).then_some(self.units)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn priority(&self) -> &'static str {
        self.priority
    }

    pub fn ex_mode(&self) -> bool {
        self.ex_mode
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

fn next_in_cycle<T: PartialEq + Copy>(cycle: &[T], current: &T) -> T {
    let next = cycle
        .iter()
        .position(|item| item == current)
        .map_or(0, |index| (index + 1) % cycle.len());
    cycle[next]
}
