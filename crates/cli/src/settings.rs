//! Optional TOML settings shared by the three tools
//!
//! Lookup order: `--config <FILE>` (must exist), then `./buildwatch.toml`
//! when present, then built-in defaults. Command-line flags override
//! whatever the file says.

use anyhow::{Context, Result};
use imaging::{Color, RemapConfig, DEFAULT_COLOR1, DEFAULT_COLOR2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use watcher::WatchConfig;

/// Settings file picked up from the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "buildwatch.toml";

/// Default image output path for recolor and tilegen
pub const DEFAULT_OUTPUT: &str = "out.png";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub watch: WatchSettings,
    pub recolor: RecolorSettings,
    pub tiles: TileSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchSettings {
    pub command: String,
    pub poll_interval_secs: u64,
    pub verbose: bool,
}

impl Default for WatchSettings {
    fn default() -> Self {
        let config = WatchConfig::default();
        Self {
            command: config.command,
            poll_interval_secs: config.poll_interval.as_secs(),
            verbose: config.verbose,
        }
    }
}

impl WatchSettings {
    pub fn to_config(&self) -> WatchConfig {
        WatchConfig {
            command: self.command.clone(),
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            verbose: self.verbose,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecolorSettings {
    pub transparent: Color,
    pub background: Color,
    pub output: PathBuf,
}

impl Default for RecolorSettings {
    fn default() -> Self {
        let config = RemapConfig::default();
        Self {
            transparent: config.transparent,
            background: config.background,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RecolorSettings {
    pub fn to_config(&self) -> RemapConfig {
        RemapConfig {
            transparent: self.transparent,
            background: self.background,
        }
    }
}

/// Tile colors and output; the layout always comes from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileSettings {
    pub color1: Color,
    pub color2: Color,
    pub output: PathBuf,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            color1: DEFAULT_COLOR1,
            color2: DEFAULT_COLOR2,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Settings {
    /// Load settings following the lookup order above
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let local = Path::new(DEFAULT_SETTINGS_FILE);
                if local.is_file() {
                    Self::load_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Check value ranges
    ///
    /// Image dimensions are checked by the tile generator itself.
    pub fn validate(&self) -> Result<()> {
        if self.watch.command.trim().is_empty() {
            anyhow::bail!("watch.command must not be empty");
        }

        if !(1..=3600).contains(&self.watch.poll_interval_secs) {
            anyhow::bail!(
                "watch.poll_interval_secs must be between 1 and 3600 (got {})",
                self.watch.poll_interval_secs
            );
        }

        Ok(())
    }
}
