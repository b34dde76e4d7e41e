use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::captions::CaptionLayout;
use crate::hotkeys::{ComboList, HotkeyAction, NudgeSettings, ZoomSettings};

/// Application configuration module
/// This module handles loading, validating and saving the configuration
/// for caption layout, hotkeys and caption fetching.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Caption layout defaults
    #[serde(default)]
    pub captions: CaptionLayout,

    /// Hotkey tuning and overrides
    #[serde(default)]
    pub hotkeys: HotkeyConfig,

    /// Caption data fetching
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Hotkey configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct HotkeyConfig {
    // @field: Timeline zoom limits
    #[serde(default)]
    pub zoom: ZoomSettings,

    // @field: Selection nudge distances
    #[serde(default)]
    pub nudge: NudgeSettings,

    // @field: Action id -> combination list, replacing the default
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

/// Caption fetch configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FetchConfig {
    // @field: Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let captions = &self.captions;
        if !(captions.max_width.is_finite() && captions.max_width > 0.0) {
            return Err(anyhow!("Caption max_width must be positive, got {}", captions.max_width));
        }
        if !(captions.font_size.is_finite() && captions.font_size > 0.0) {
            return Err(anyhow!("Caption font_size must be positive, got {}", captions.font_size));
        }
        if captions.font_family.trim().is_empty() {
            return Err(anyhow!("Caption font_family must not be empty"));
        }

        let zoom = &self.hotkeys.zoom;
        if !(zoom.min > 0.0 && zoom.min <= zoom.max) {
            return Err(anyhow!(
                "Zoom limits must satisfy 0 < min <= max, got min={} max={}",
                zoom.min, zoom.max
            ));
        }
        if !(zoom.step.is_finite() && zoom.step > 0.0) {
            return Err(anyhow!("Zoom step must be positive, got {}", zoom.step));
        }

        let nudge = &self.hotkeys.nudge;
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !(positive(nudge.step) && positive(nudge.fast_step)) {
            return Err(anyhow!("Nudge steps must be positive"));
        }

        for (id, combos) in &self.hotkeys.overrides {
            id.parse::<HotkeyAction>()
                .with_context(|| format!("Invalid hotkey override '{}'", id))?;
            combos
                .parse::<ComboList>()
                .with_context(|| format!("Invalid combination for hotkey '{}': '{}'", id, combos))?;
        }

        if self.fetch.timeout_secs == 0 {
            return Err(anyhow!("Fetch timeout must be at least one second"));
        }

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Load the config at `path`, writing a default one first if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save_to_file(path)?;
        Ok(config)
    }
}
