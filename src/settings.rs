//! Runtime settings and preferences
//!
//! Loaded from an optional JSON file; anything left out keeps its default.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::error::ConfigError;

/// How frames are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// ASCII playfield on stdout
    #[default]
    Text,
    /// One JSON snapshot per rendered frame on stdout
    Json,
    /// Nothing drawn; events still go to the log
    None,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Text => "text",
            RendererKind::Json => "json",
            RendererKind::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "ascii" => Some(RendererKind::Text),
            "json" => Some(RendererKind::Json),
            "none" | "off" => Some(RendererKind::None),
            _ => None,
        }
    }
}

/// Demo-mode typist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotSettings {
    pub enabled: bool,
    /// Typing speed
    pub chars_per_second: f32,
    /// Chance that a keystroke is a typo (0.0 - 1.0)
    pub typo_chance: f32,
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            chars_per_second: 6.0,
            typo_chance: 0.03,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; random when absent
    pub seed: Option<u64>,
    /// Frame rate cap
    pub target_fps: u32,
    /// Pace frames against the wall clock. When false frames are simulated
    /// back to back with a fixed delta.
    pub realtime: bool,
    pub renderer: RendererKind,
    /// Draw every Nth frame (events are always reported)
    pub render_every: u32,
    /// Quit after this many seconds of game time
    pub session_limit_secs: Option<f32>,
    pub autopilot: AutopilotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,
            realtime: true,
            renderer: RendererKind::Text,
            render_every: 30,
            session_limit_secs: Some(120.0),
            autopilot: AutopilotSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings: Self = load_json(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Seconds per frame at the target rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Session limit in milliseconds of game time
    pub fn session_limit_ms(&self) -> Option<u64> {
        self.session_limit_secs
            .filter(|secs| *secs > 0.0)
            .map(|secs| (secs * 1000.0) as u64)
    }
}

/// Read a JSON config file into `T`
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
