//! Application configuration.

use crate::consts::cli_consts::{MAX_CHART_POINTS, magi, radar, waveform};
use crate::gadgets::heartbeat::HeartbeatPolicy;
use crate::scheduler::Intervals;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Which presentation targets exist. A disabled panel is never drawn and its
/// updates become no-ops.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Panels {
    pub readouts: bool,
    pub waveform: bool,
    pub heartbeat: bool,
    pub log: bool,
    pub radar: bool,
    pub overlay: bool,
    pub status: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            readouts: true,
            waveform: true,
            heartbeat: true,
            log: true,
            radar: true,
            overlay: true,
            status: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct HeartbeatConfig {
    pub policy: HeartbeatPolicy,
    pub max_points: usize,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            policy: HeartbeatPolicy::default(),
            max_points: MAX_CHART_POINTS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RadarConfig {
    pub min_blips: usize,
    pub max_blips: usize,
    pub warning_hold_ms: u64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            min_blips: radar::MIN_BLIPS,
            max_blips: radar::MAX_BLIPS,
            warning_hold_ms: radar::WARNING_HOLD_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WaveformConfig {
    pub width: u32,
    pub height: u32,
    /// Phase drift in radians per millisecond
    pub speed: f64,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            width: waveform::WIDTH,
            height: waveform::HEIGHT,
            speed: waveform::SPEED,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MagiConfig {
    /// Approval threshold; votes above it (out of 100) reject
    pub threshold: u32,
    pub file: String,
}

impl Default for MagiConfig {
    fn default() -> Self {
        Self {
            threshold: magi::DEFAULT_THRESHOLD,
            file: magi::DEFAULT_FILE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub intervals: Intervals,
    pub panels: Panels,
    pub heartbeat: HeartbeatConfig,
    pub radar: RadarConfig,
    pub waveform: WaveformConfig,
    pub magi: MagiConfig,
    pub sound: bool,
    /// Fixed seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intervals: Intervals::default(),
            panels: Panels::default(),
            heartbeat: HeartbeatConfig::default(),
            radar: RadarConfig::default(),
            waveform: WaveformConfig::default(),
            magi: MagiConfig::default(),
            sound: true,
            seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default config location: `~/.nerv/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".nerv").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.seed = Some(7);
        config.heartbeat.policy = HeartbeatPolicy::Pattern;
        config.panels.radar = false;
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::default();
        config1.save(&path).unwrap();

        let mut config2 = Config::default();
        config2.magi.threshold = 90;
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            std::io::ErrorKind::InvalidData
        );
    }

    #[test]
    // Missing fields fall back to their defaults.
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"intervals": {"radar_ms": 5000}, "heartbeat": {"policy": "pattern"}}"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.intervals.radar_ms, 5000);
        assert_eq!(config.intervals.data_ms, 100);
        assert_eq!(config.heartbeat.policy, HeartbeatPolicy::Pattern);
        assert_eq!(config.heartbeat.max_points, 30);
        assert!(config.sound);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }
}
