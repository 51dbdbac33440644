// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Notification durations and inline host
//! - `[diagnostics]` - Diagnostics buffer size
//!
//! Out-of-range durations are not rejected; they are clamped into bounds
//! when turned into [`Timings`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config;
//!
//! let (mut config, _warning) = config::load();
//! config.notifications.exit_transition_ms = Some(500);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::BufferCapacity;
use crate::error::{Error, Result};
use crate::ui::notifications::Timings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when `settings.toml` cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Notification lifecycle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Display time of inline notifications, in milliseconds.
    #[serde(
        default = "default_inline_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_duration_ms: Option<u64>,

    /// Fade-out of inline notifications, in milliseconds.
    #[serde(
        default = "default_inline_fade_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub inline_fade_ms: Option<u64>,

    /// Exit transition of blocking notifications, in milliseconds.
    #[serde(
        default = "default_exit_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_transition_ms: Option<u64>,

    /// Delay between a backdrop click and the teardown, in milliseconds.
    #[serde(
        default = "default_backdrop_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub backdrop_debounce_ms: Option<u64>,

    /// Whether the inline host is mounted. Without it inline notifications
    /// are dropped.
    #[serde(default = "default_inline_host", skip_serializing_if = "Option::is_none")]
    pub inline_host: Option<bool>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            inline_duration_ms: default_inline_duration_ms(),
            inline_fade_ms: default_inline_fade_ms(),
            exit_transition_ms: default_exit_transition_ms(),
            backdrop_debounce_ms: default_backdrop_debounce_ms(),
            inline_host: default_inline_host(),
        }
    }
}

impl NotificationsConfig {
    /// Converts the section into engine timings, clamping every value.
    #[must_use]
    pub fn timings(&self) -> Timings {
        let millis = |value: Option<u64>, default: u64, min: u64, max: u64| {
            Duration::from_millis(value.unwrap_or(default).clamp(min, max))
        };
        Timings {
            inline_duration: millis(
                self.inline_duration_ms,
                DEFAULT_INLINE_DURATION_MS,
                MIN_INLINE_DURATION_MS,
                MAX_INLINE_DURATION_MS,
            ),
            inline_fade: millis(
                self.inline_fade_ms,
                DEFAULT_INLINE_FADE_MS,
                MIN_INLINE_FADE_MS,
                MAX_INLINE_FADE_MS,
            ),
            exit_transition: millis(
                self.exit_transition_ms,
                DEFAULT_EXIT_TRANSITION_MS,
                MIN_EXIT_TRANSITION_MS,
                MAX_EXIT_TRANSITION_MS,
            ),
            backdrop_debounce: millis(
                self.backdrop_debounce_ms,
                DEFAULT_BACKDROP_DEBOUNCE_MS,
                MIN_BACKDROP_DEBOUNCE_MS,
                MAX_BACKDROP_DEBOUNCE_MS,
            ),
        }
    }

    #[must_use]
    pub fn has_inline_host(&self) -> bool {
        self.inline_host.unwrap_or(true)
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Maximum number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_inline_duration_ms() -> Option<u64> {
    Some(DEFAULT_INLINE_DURATION_MS)
}

fn default_inline_fade_ms() -> Option<u64> {
    Some(DEFAULT_INLINE_FADE_MS)
}

fn default_exit_transition_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_TRANSITION_MS)
}

fn default_backdrop_debounce_ms() -> Option<u64> {
    Some(DEFAULT_BACKDROP_DEBOUNCE_MS)
}

fn default_inline_host() -> Option<bool> {
    Some(true)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable one yields the defaults plus the i18n
/// key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    match get_config_path_with_override(base_dir) {
        Some(path) if path.exists() => match load_from_path(&path) {
            Ok(config) => (config, None),
            Err(_) => (Config::default(), Some(LOAD_ERROR_KEY.to_string())),
        },
        _ => (Config::default(), None),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
