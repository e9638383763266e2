//! # Settings
//!
//! Process-wide knobs for location rendering.
//!
//! Read from the environment once per process:
//! - `VOUCH_WALK_FRAMES`: `1|true|on|yes` or `0|false|off|no` (default on)
//! - `VOUCH_PATH_STYLE`: `full` (default) or `file_name`
//!
//! `Settings` also implements `Deserialize` so hosts can embed it in their own
//! configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable toggling the stack walk for wrapped reporters.
pub const WALK_FRAMES_VAR: &str = "VOUCH_WALK_FRAMES";

/// Environment variable selecting how source paths are rendered.
pub const PATH_STYLE_VAR: &str = "VOUCH_PATH_STYLE";

// =============================================================================
// PATH STYLE
// =============================================================================

/// How the file part of a location is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStyle {
    /// The path exactly as the compiler or debug info reports it.
    #[default]
    Full,
    /// Only the final path component.
    FileName,
}

impl PathStyle {
    /// Render `path` in this style.
    #[must_use]
    pub fn render(self, path: &Path) -> String {
        match self {
            Self::Full => path.display().to_string(),
            Self::FileName => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

impl FromStr for PathStyle {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "file_name" | "filename" | "file" => Ok(Self::FileName),
            _ => Err(SettingsError::InvalidValue {
                var: PATH_STYLE_VAR,
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

/// Location rendering settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Walk the stack for wrapped reporters. When off, every depth resolves
    /// to the immediate caller of the assertion.
    pub walk_frames: bool,
    /// Path rendering.
    pub path_style: PathStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walk_frames: true,
            path_style: PathStyle::Full,
        }
    }
}

impl Settings {
    /// Build settings from an arbitrary key lookup.
    ///
    /// Missing keys keep their defaults; present but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(WALK_FRAMES_VAR) {
            settings.walk_frames = parse_flag(WALK_FRAMES_VAR, &raw)?;
        }
        if let Some(raw) = lookup(PATH_STYLE_VAR) {
            settings.path_style = raw.parse()?;
        }

        Ok(settings)
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// The process-wide snapshot, read from the environment on first use.
    ///
    /// Invalid values are logged and replaced by defaults.
    pub fn global() -> &'static Settings {
        static GLOBAL: OnceLock<Settings> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid vouch settings, using defaults");
                Self::default()
            })
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, SettingsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// A configuration value could not be understood.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// The variable is set to something we do not recognise.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

// =============================================================================
// TESTS
// =============================================================================
