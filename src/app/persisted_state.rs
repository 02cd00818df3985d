// SPDX-License-Identifier: MPL-2.0
//! Cross-session state cached on disk as CBOR.
//!
//! Transient state that should survive restarts but is not user-configurable
//! (unlike preferences in `settings.toml`): the signed-in account and the
//! directory the last upload came from.
//!
//! State is stored in CBOR (Concise Binary Object Representation) for compact
//! binary storage and a clear separation from the user-editable TOML
//! preferences.
//!
//! # Where the file lives
//!
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. Set the `REELSBOOK_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory
//!
//! Load and save never fail hard; they return warning keys the app surfaces
//! as notifications, because losing cached state must not block startup.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// File name inside the app data directory.
const STATE_FILE: &str = "state.cbor";

fn warning(key: &str) -> Option<String> {
    Some(key.to_string())
}

/// What the app remembers between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Email of the account whose session this device holds.
    ///
    /// `None` means signed out. The session gateway re-establishes the
    /// session from this at startup; signing out clears it.
    #[serde(default)]
    pub account_email: Option<String>,

    /// Last directory a video was picked from.
    /// Used as the initial directory for the upload file dialog.
    #[serde(default)]
    pub last_video_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the platform data directory.
    ///
    /// Returns the state plus an optional warning key. A broken or unreadable
    /// file falls back to defaults with a key the app shows as a notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir` instead of the platform directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file(base_dir) else {
            return (Self::default(), None);
        };
        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(_) => return (Self::default(), warning("notification-state-read-error")),
        };
        match ciborium::from_reader(BufReader::new(file)) {
            Ok(state) => (state, None),
            Err(_) => (Self::default(), warning("notification-state-parse-error")),
        }
    }

    /// Writes state to the platform data directory.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Writes state under `base_dir` instead of the platform directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file(base_dir) else {
            return warning("notification-state-path-error");
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return warning("notification-state-dir-error");
            }
        }

        let file = match fs::File::create(&path) {
            Ok(file) => file,
            Err(_) => return warning("notification-state-create-error"),
        };
        match ciborium::into_writer(self, BufWriter::new(file)) {
            Ok(()) => None,
            Err(_) => warning("notification-state-write-error"),
        }
    }

    /// Remembers the directory the given video file came from.
    ///
    /// Takes the parent of the path; a path with no parent (like `/`)
    /// leaves the stored directory untouched.
    pub fn set_last_video_directory_from_file(&mut self, file_path: &std::path::Path) {
        if let Some(parent) = file_path.parent() {
            self.last_video_directory = Some(parent.to_path_buf());
        }
    }

    fn state_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scratch_dir() -> tempfile::TempDir {
        tempdir().expect("temp dir")
    }

    #[test]
    fn default_state_is_signed_out() {
        let state = AppState::default();
        assert!(state.account_email.is_none());
        assert!(state.last_video_directory.is_none());
    }

    #[test]
    fn set_last_video_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_video_directory_from_file(std::path::Path::new(
            "/home/user/clips/skate.mp4",
        ));
        assert_eq!(
            state.last_video_directory,
            Some(PathBuf::from("/home/user/clips"))
        );
    }

    #[test]
    fn set_last_video_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_video_directory_from_file(std::path::Path::new("/"));
        // Root has no parent, so the directory stays unset
        assert!(state.last_video_directory.is_none());
    }

    #[test]
    fn save_and_load_round_trip_preserves_state() {
        let dir = scratch_dir();
        let original = AppState {
            account_email: Some("ada@example.org".to_string()),
            last_video_directory: Some(PathBuf::from("/home/ada/videos")),
        };

        assert!(original.save_to(Some(dir.path().to_path_buf())).is_none());

        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_missing_file_returns_default_without_warning() {
        let dir = scratch_dir();

        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_corrupted_file_returns_default_with_warning() {
        let dir = scratch_dir();
        fs::write(dir.path().join(STATE_FILE), b"definitely not cbor").expect("write");

        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));

        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }

    #[test]
    fn save_creates_missing_parent_directory() {
        let dir = scratch_dir();
        let nested = dir.path().join("nested").join("data");

        let warning = AppState::default().save_to(Some(nested.clone()));

        assert!(warning.is_none());
        assert!(nested.join(STATE_FILE).exists());
    }
}
