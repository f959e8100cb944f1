//! Radar blips, regenerated from scratch on every sweep.

use crate::consts::cli_consts::radar::{INNER_RADIUS_PCT, OUTER_RADIUS_PCT};
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blip {
    /// Radians in `[0, 2π)`
    pub angle: f64,
    /// Percent of the scope, in the blip annulus
    pub radius: f64,
}

impl Blip {
    /// Horizontal offset from the scope's left edge, percent.
    pub fn x_pct(&self) -> f64 {
        50.0 + self.radius * self.angle.cos()
    }

    /// Vertical offset from the scope's top edge, percent.
    pub fn y_pct(&self) -> f64 {
        50.0 + self.radius * self.angle.sin()
    }
}

#[derive(Debug, Clone)]
pub struct RadarScope {
    blips: Vec<Blip>,
    count: RangeInclusive<usize>,
}

impl RadarScope {
    /// `min_blips > max_blips` is treated as `max_blips..=max_blips`.
    pub fn new(min_blips: usize, max_blips: usize) -> Self {
        Self {
            blips: Vec::new(),
            count: min_blips.min(max_blips)..=max_blips,
        }
    }

    /// Replace every blip with a fresh random set and return how many appeared.
    pub fn sweep<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = rng.gen_range(self.count.clone());
        self.blips = (0..count)
            .map(|_| Blip {
                angle: rng.gen_range(0.0..TAU),
                radius: rng.gen_range(INNER_RADIUS_PCT..OUTER_RADIUS_PCT),
            })
            .collect();
        count
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub fn bounds(&self) -> &RangeInclusive<usize> {
        &self.count
    }
}
