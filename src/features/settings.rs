//! Application settings persistence
//!
//! Handles saving and loading user preferences, including the style
//! attributes every progress widget reads once at construction.

use std::path::{Path, PathBuf};

use iced::Color;
use serde::{Deserialize, Serialize};

use super::progress::DEFAULT_MAX;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Attributes of the circular progress indicator
    #[serde(default)]
    pub circle: ProgressAttributes,
    /// Attributes shared by the pin buttons
    #[serde(default)]
    pub pin: ProgressAttributes,
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Interface language code ("en" or "zh")
    pub language: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

/// Style attributes of a progress widget
///
/// Colours are `#rrggbb` or `#rrggbbaa`; a missing or unreadable colour
/// falls back to the theme default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressAttributes {
    pub max: i32,
    pub progress: i32,
    pub circle_color: Option<String>,
    pub progress_color: Option<String>,
    pub text_color: Option<String>,
    pub text_size: f32,
    /// Intrinsic square size reported by measurement
    pub drawable_size: f32,
    /// Diameter of the progress disc
    pub inner_size: f32,
}

impl Default for ProgressAttributes {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            progress: 0,
            circle_color: None,
            progress_color: None,
            text_color: None,
            text_size: 12.0,
            drawable_size: 48.0,
            inner_size: 28.0,
        }
    }
}

/// Resolved, immutable visual style of a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyle {
    pub circle_color: Color,
    pub progress_color: Color,
    pub text_color: Color,
    pub text_size: f32,
    pub drawable_size: f32,
    pub inner_size: f32,
}

impl ProgressAttributes {
    /// Resolve colours against the defaults of the current theme
    pub fn resolve(&self, defaults: ThemeColors) -> VisualStyle {
        VisualStyle {
            circle_color: resolve_color(self.circle_color.as_deref(), defaults.circle),
            progress_color: resolve_color(self.progress_color.as_deref(), defaults.progress),
            text_color: resolve_color(self.text_color.as_deref(), defaults.text),
            text_size: self.text_size,
            drawable_size: self.drawable_size,
            inner_size: self.inner_size,
        }
    }
}

/// Theme-provided fallback colours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub circle: Color,
    pub progress: Color,
    pub text: Color,
}

fn resolve_color(value: Option<&str>, fallback: Color) -> Color {
    match value {
        None => fallback,
        Some(hex) => parse_hex_color(hex).unwrap_or_else(|| {
            tracing::warn!("Ignoring invalid color attribute {:?}", hex);
            fallback
        }),
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        6 => Some(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Some(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)? as f32 / 255.0,
        )),
        _ => None,
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "pinprogress", "PinProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({}): {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
