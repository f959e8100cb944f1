//! Session setup and initialization

use crate::audio::{CueSink, sink_for};
use crate::config::{Config, get_config_path};
use crate::magi::Magi;
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::error::Error;
use std::path::PathBuf;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub mute: bool,
    pub magi_file: Option<String>,
}

/// Session data for both TUI and headless modes
#[derive(Debug, Clone)]
pub struct SessionData {
    /// Resolved configuration with CLI overrides applied
    pub config: Config,
    /// Seed of the session's random source
    pub seed: u64,
}

impl SessionData {
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Sound output for this session; silent when sound is off.
    pub fn cues(&self) -> Box<dyn CueSink> {
        sink_for(self.config.sound)
    }

    pub fn dashboard(&self, with_background: bool) -> DashboardState {
        DashboardState::new(
            &self.config,
            UIConfig::new(with_background),
            self.rng(),
            self.cues(),
        )
    }

    pub fn magi(&self) -> Magi {
        let mut magi = Magi::new(
            self.config.magi.threshold,
            self.config.magi.file.clone(),
            self.rng(),
            self.cues(),
        );
        if !self.config.sound {
            magi.toggle_sound();
        }
        magi
    }
}

/// Load the config and apply command-line overrides.
///
/// The seed comes from `--seed`, then the config file, then entropy.
pub fn setup_session(overrides: Overrides) -> Result<SessionData, Box<dyn Error>> {
    let path = match overrides.config_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    let mut config = Config::load_or_default(&path)?;
    log::debug!("loaded config from {}", path.display());

    if overrides.mute {
        config.sound = false;
    }
    if let Some(file) = overrides.magi_file {
        config.magi.file = file;
    }

    let seed = overrides
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random::<u64>);

    Ok(SessionData { config, seed })
}
