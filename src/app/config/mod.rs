// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences (`settings.toml`).
//!
//! # Sections
//!
//! - `[general]` - Locale and theme
//! - `[backend]` - ReelsBook server address and request timeout
//! - `[upload]` - Transfer tuning
//!
//! # Where the file lives
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `REELSBOOK_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! Loading never aborts the application: an unreadable or invalid file
//! yields defaults plus a warning key the caller surfaces as a notification.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Sections
// =============================================================================

/// Language and appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Locale code such as "en-US" or "fr".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Light, dark, or follow the system.
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
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL of the ReelsBook server, without a trailing slash.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Timeout for catalog requests, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Upload transfer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Chunk size for streamed uploads, in kibibytes.
    #[serde(
        default = "default_upload_chunk_kb",
        skip_serializing_if = "Option::is_none"
    )]
    pub chunk_kb: Option<u32>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            chunk_kb: default_upload_chunk_kb(),
        }
    }
}

/// The whole settings file, one struct per TOML table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Language and appearance.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Backend connection settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Upload transfer settings.
    #[serde(default)]
    pub upload: UploadConfig,
}

// =============================================================================
// Accessors
// =============================================================================
// Raw fields stay Option so a round-trip preserves what the user wrote;
// consumers go through these to get defaults and bounds applied.

impl Config {
    /// Backend base URL with the default applied and trailing slashes removed.
    #[must_use]
    pub fn backend_base_url(&self) -> String {
        self.backend
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Catalog request timeout with the default and bounds applied.
    #[must_use]
    pub fn request_timeout_secs(&self) -> u64 {
        self.backend
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS)
    }

    /// Upload chunk size in bytes with the default and bounds applied.
    #[must_use]
    pub fn upload_chunk_bytes(&self) -> usize {
        let kb = self
            .upload
            .chunk_kb
            .unwrap_or(DEFAULT_UPLOAD_CHUNK_KB)
            .clamp(MIN_UPLOAD_CHUNK_KB, MAX_UPLOAD_CHUNK_KB);
        kb as usize * 1024
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_API_BASE_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_upload_chunk_kb() -> Option<u32> {
    Some(DEFAULT_UPLOAD_CHUNK_KB)
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
        other => Err(D::Error::custom(format!(
            "unknown theme_mode {other:?}, expected \"light\", \"dark\" or \"system\""
        ))),
    }
}

// =============================================================================
// Persistence
// =============================================================================

fn config_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads settings from the platform config directory.
///
/// Returns the config plus an optional warning key. A missing file is normal
/// and silent; a present-but-broken file falls back to defaults with a key
/// the caller can surface.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads settings from `base_dir` instead of the platform directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Parses the TOML file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes settings to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Writes settings under `base_dir` instead of the platform directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file_path(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn scratch_dir() -> tempfile::TempDir {
        tempdir().expect("temp dir")
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("de".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.backend.base_url = Some("https://reels.example.org".to_string());
        config.backend.request_timeout_secs = Some(10);
        config.upload.chunk_kb = Some(64);

        let dir = scratch_dir();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let dir = scratch_dir();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("write");

        match load_from_path(&path) {
            Err(Error::Config(reason)) => assert!(reason.contains("expected")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let dir = scratch_dir();
        fs::write(dir.path().join(CONFIG_FILE), "[general\nlanguage =").expect("write");

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let dir = scratch_dir();

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let dir = scratch_dir();
        let path = dir.path().join("a").join("b").join(CONFIG_FILE);

        save_to_path(&Config::default(), &path).expect("save");

        assert!(path.exists());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = scratch_dir();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.backend, BackendConfig::default());
        assert_eq!(loaded.upload, UploadConfig::default());
    }

    #[test]
    fn backend_base_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.backend.base_url = Some("https://reels.example.org/".to_string());

        assert_eq!(config.backend_base_url(), "https://reels.example.org");
    }

    #[test]
    fn accessor_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.backend.request_timeout_secs = Some(0);
        config.upload.chunk_kb = Some(1_000_000);

        assert_eq!(config.request_timeout_secs(), MIN_REQUEST_TIMEOUT_SECS);
        assert_eq!(
            config.upload_chunk_bytes(),
            MAX_UPLOAD_CHUNK_KB as usize * 1024
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = scratch_dir();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"midnight\"\n").expect("write");

        match load_from_path(&path) {
            Err(Error::Config(reason)) => assert!(reason.contains("unknown theme_mode")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
