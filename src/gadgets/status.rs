//! Randomized unit status panel.

use rand::Rng;
use rand::seq::SliceRandom;

pub const UNITS: [&str; 3] = ["EVA-00", "EVA-01", "EVA-02"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum UnitStatus {
    Active,
    Standby,
    Offline,
}

const STATUSES: [UnitStatus; 3] = [UnitStatus::Active, UnitStatus::Standby, UnitStatus::Offline];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    /// Three digit display code in `[100, 699]`
    pub code: u16,
    pub units: [UnitStatus; 3],
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            code: 100,
            units: [UnitStatus::Standby; 3],
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.code = rng.gen_range(100..700);
        for unit in self.units.iter_mut() {
            *unit = *STATUSES.choose(rng).unwrap_or(&UnitStatus::Standby);
        }
    }

    pub fn summary(&self) -> String {
        let units: Vec<String> = UNITS
            .iter()
            .zip(self.units.iter())
            .map(|(name, status)| format!("{} {}", name, status))
            .collect();
        format!("CODE {} | {}", self.code, units.join(" | "))
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_in_range() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut board = StatusBoard::new();
        for _ in 0..1_000 {
            board.shuffle(&mut rng);
            assert!((100..=699).contains(&board.code));
        }
    }

    #[test]
    fn summary_lists_every_unit() {
        let board = StatusBoard {
            code: 512,
            units: [UnitStatus::Active, UnitStatus::Standby, UnitStatus::Offline],
        };
        assert_eq!(
            board.summary(),
            "CODE 512 | EVA-00 ACTIVE | EVA-01 STANDBY | EVA-02 OFFLINE"
        );
    }
}
