use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::presets::PRESETS_FILE;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Write log output to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Alternative location of the preset store. Relative paths are resolved
    /// against the executable's directory.
    #[serde(default)]
    pub presets_file: Option<String>,
    #[serde(default = "default_window_size")]
    pub window_size: (f32, f32),
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Ask before deleting a preset.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_window_size() -> (f32, f32) {
    (420.0, 480.0)
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            presets_file: None,
            window_size: default_window_size(),
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    /// Location of the preset store for these settings.
    pub fn presets_path(&self, base: &Path) -> PathBuf {
        match &self.presets_file {
            Some(p) => base.join(p),
            None => base.join(PRESETS_FILE),
        }
    }

    pub fn log_path(&self, base: &Path) -> Option<PathBuf> {
        self.log_file.as_ref().map(|p| base.join(p))
    }
}

/// Directory of the running executable, falling back to the current
/// directory when it cannot be resolved.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.canonicalize().ok().or(Some(p)))
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
