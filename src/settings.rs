use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    DEFAULT_SPEED_LEVEL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MAX_SPEED_LEVEL, MIN_SPEED_LEVEL, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::error::StoreError;

/// Snake speed, always within `MIN_SPEED_LEVEL..=MAX_SPEED_LEVEL`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub fn new(level: i64) -> Self {
        Self(level.clamp(MIN_SPEED_LEVEL as i64, MAX_SPEED_LEVEL as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn step(self, delta: i8) -> Self {
        Self::new(self.0 as i64 + delta as i64)
    }

    /// Simulation ticks per second: 6 at level 1 up to 22 at level 10.
    pub fn ticks_per_second(self) -> u32 {
        6 + (self.0 as u32 - 1) * 16 / 9
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(DEFAULT_SPEED_LEVEL)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub speed_level: SpeedLevel,
    pub fullscreen: bool,
    pub window_size: (u32, u32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_level: SpeedLevel::default(),
            fullscreen: false,
            window_size: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Raises both dimensions to at least the window floor.
pub fn clamp_window_size(width: u32, height: u32) -> (u32, u32) {
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

fn dimension(value: &Value) -> Option<u32> {
    if let Some(v) = value.as_u64() {
        return Some(v.min(u32::MAX as u64) as u32);
    }
    if value.as_i64().is_some() {
        return Some(0);
    }
    value.as_f64().map(|v| v.clamp(0.0, u32::MAX as f64) as u32)
}

impl Settings {
    /// Merges every well-typed field of `value` over the defaults.
    pub fn from_json(value: &Value) -> Self {
        let mut settings = Settings::default();
        let Some(map) = value.as_object() else {
            tracing::debug!("settings are not a JSON object, using defaults");
            return settings;
        };

        if let Some(level) = map.get("speed_level").and_then(Value::as_i64) {
            settings.speed_level = SpeedLevel::new(level);
        }
        if let Some(fullscreen) = map.get("fullscreen").and_then(Value::as_bool) {
            settings.fullscreen = fullscreen;
        }
        if let Some([w, h]) = map.get("window_size").and_then(Value::as_array).map(Vec::as_slice) {
            if let (Some(w), Some(h)) = (dimension(w), dimension(h)) {
                settings.window_size = clamp_window_size(w, h);
            }
        }
        settings
    }
}

pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(source) => {
                let err = StoreError::Read { path: self.path.clone(), source };
                tracing::warn!("{err}, using default settings");
                return Settings::default();
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Settings::from_json(&value),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "malformed settings ({err}), using defaults");
                Settings::default()
            }
        }
    }

    pub fn try_save(&self, settings: &Settings) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, text).map_err(|source| StoreError::Write { path: self.path.clone(), source })
    }

    /// Best effort: a failed write is logged and otherwise ignored.
    pub fn save(&self, settings: &Settings) {
        match self.try_save(settings) {
            Ok(()) => tracing::debug!(?settings, "settings saved"),
            Err(err) => tracing::warn!("{err}"),
        }
    }
}
