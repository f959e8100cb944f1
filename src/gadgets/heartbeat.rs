//! Heartbeat chart feed.

use crate::buffer::EvictingBuffer;
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One beat of the `pattern` policy; the feed cycles through it.
const BEAT_SHAPE: [f64; 12] = [1.0, 1.0, 1.2, 1.0, 0.6, 6.5, 8.0, 2.0, 0.8, 1.4, 1.1, 1.0];
const PATTERN_JITTER: f64 = 0.2;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeartbeatPolicy {
    /// Baseline noise with occasional spikes
    #[default]
    Random,
    /// Fixed repeating beat with small jitter
    Pattern,
}

/// Samples with a parallel label sequence, both capped together.
#[derive(Debug, Clone)]
pub struct HeartbeatChart {
    samples: EvictingBuffer<f64>,
    labels: EvictingBuffer<String>,
    policy: HeartbeatPolicy,
    cursor: usize,
}

impl HeartbeatChart {
    pub fn new(max_points: usize, policy: HeartbeatPolicy) -> Self {
        Self {
            samples: EvictingBuffer::new(max_points),
            labels: EvictingBuffer::new(max_points),
            policy,
            cursor: 0,
        }
    }

    /// Append one sample according to the configured policy.
    pub fn feed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let sample = match self.policy {
            HeartbeatPolicy::Random => {
                let mut sample = 1.0 + rng.r#gen::<f64>() * 2.0;
                if rng.r#gen::<f64>() > 0.8 {
                    sample += rng.r#gen::<f64>() * 5.0;
                }
                sample
            }
            HeartbeatPolicy::Pattern => {
                let base = BEAT_SHAPE[self.cursor];
                self.cursor = (self.cursor + 1) % BEAT_SHAPE.len();
                base + rng.gen_range(-PATTERN_JITTER..=PATTERN_JITTER)
            }
        };
        self.push(sample, Local::now().format("%H:%M:%S").to_string());
        sample
    }

    fn push(&mut self, sample: f64, label: String) {
        self.samples.push_back(sample);
        self.labels.push_back(label);
    }

    pub fn samples(&self) -> impl DoubleEndedIterator<Item = f64> + ExactSizeIterator + '_ {
        self.samples.iter().copied()
    }

    /// Wall clock time of each sample, `HH:MM:SS`, oldest first.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn max_points(&self) -> usize {
        self.samples.capacity()
    }

    /// Samples as `(index, value)` pairs for charting.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples()
            .enumerate()
            .map(|(i, v)| (i as f64, v))
            .collect()
    }
}
