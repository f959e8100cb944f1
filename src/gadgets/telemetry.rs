//! Randomized telemetry readouts.

use crate::consts::cli_consts::telemetry::*;
use rand::Rng;

/// One set of readouts, rounded the way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    /// Pilot synchronization rate, percent (2 decimals).
    pub sync_rate: f64,
    /// Core temperature, °C (1 decimal).
    pub core_temp: f64,
    /// Main power, percent (integer).
    pub power: f64,
    /// Set when this reading's temperature is above the warning threshold.
    pub temp_warning: bool,
}

impl Telemetry {
    /// Draw a fresh, independent set of readouts.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sync_rate = round_to(SYNC_RATE_MIN + rng.r#gen::<f64>() * SYNC_RATE_SPAN, 2);
        let core_temp = round_to(CORE_TEMP_MIN + rng.r#gen::<f64>() * CORE_TEMP_SPAN, 1);
        let power = round_to(POWER_MIN + rng.r#gen::<f64>() * POWER_SPAN, 0);
        Self {
            sync_rate,
            core_temp,
            power,
            temp_warning: core_temp > CORE_TEMP_WARNING,
        }
    }

    pub fn format_sync_rate(&self) -> String {
        format!("{:.2}%", self.sync_rate)
    }

    pub fn format_core_temp(&self) -> String {
        format!("{:.1}°C", self.core_temp)
    }

    pub fn format_power(&self) -> String {
        format!("{:.0}%", self.power)
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            sync_rate: 0.0,
            core_temp: 25.0,
            power: 100.0,
            temp_warning: false,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5_000 {
            let t = Telemetry::sample(&mut rng);
            assert!((40.5..=42.5).contains(&t.sync_rate), "{}", t.sync_rate);
            assert!((82.5..=87.5).contains(&t.core_temp), "{}", t.core_temp);
            assert!((95.0..=100.0).contains(&t.power), "{}", t.power);
        }
    }

    #[test]
    // The flag follows the same reading, with no memory of the previous one.
    fn warning_iff_above_threshold() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut saw_warning = false;
        let mut saw_clear = false;
        for _ in 0..2_000 {
            let t = Telemetry::sample(&mut rng);
            assert_eq!(t.temp_warning, t.core_temp > 86.0);
            saw_warning |= t.temp_warning;
            saw_clear |= !t.temp_warning;
        }
        assert!(saw_warning && saw_clear);
    }

    #[test]
    fn same_seed_same_readouts() {
        let a = Telemetry::sample(&mut StdRng::seed_from_u64(42));
        let b = Telemetry::sample(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn formatting_matches_precision() {
        let t = Telemetry {
            sync_rate: 41.5,
            core_temp: 86.0,
            power: 97.0,
            temp_warning: false,
        };
        assert_eq!(t.format_sync_rate(), "41.50%");
        assert_eq!(t.format_core_temp(), "86.0°C");
        assert_eq!(t.format_power(), "97%");
    }
}
