//! TOML configuration.
//!
//! Looked up at `$PLAYDECK_CONFIG`, otherwise in the platform config
//! directory (`~/.config/playdeck/config.toml` on Linux). Every section is
//! optional; a missing or broken file yields the defaults.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::library::Song;

pub const CONFIG_ENV: &str = "PLAYDECK_CONFIG";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub likes: LikesConfig,
    pub ui: UiConfig,
    pub catalog: CatalogConfig,
}

/// What the player's next/previous controls push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipBehavior {
    /// Push the current song again.
    #[default]
    Repeat,
    /// Push the catalog neighbour of the current song.
    Adjacent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub tick_interval_ms: u64,
    /// Progress gained per tick, in percent of the track.
    pub step_percent: u16,
    pub skip: SkipBehavior,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            step_percent: 1,
            skip: SkipBehavior::Repeat,
        }
    }
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn step(&self) -> u16 {
        self.step_percent.clamp(1, 100)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LikesConfig {
    /// One like store for both screens instead of one per screen.
    pub shared: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub render_tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { render_tick_ms: 33 }
    }
}

impl UiConfig {
    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms.max(1))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub label: Option<String>,
    pub header_cover_url: Option<String>,
    pub songs: Option<Vec<Song>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {0:?}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    project_directory()
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
        .ok_or(ConfigError::NoConfigDir)
}

pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    parse(&contents)
}

/// Never fails: problems are logged and the defaults are used.
pub fn load() -> Config {
    match config_path() {
        Ok(path) => load_or_default(&path),
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Config::default()
        }
    }
}

pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!(?path, "no config file, using defaults");
        return Config::default();
    }

    match load_from(path) {
        Ok(config) => {
            tracing::info!(?path, "config loaded");
            config
        }
        Err(e) => {
            tracing::error!(?path, error = %e, "config rejected, using defaults");
            Config::default()
        }
    }
}
