// SPDX-License-Identifier: MPL-2.0
//! Resolution of the application data and config directories.
//!
//! Every component that touches the filesystem goes through this module so
//! the whole app agrees on where state and settings live. Resolution order:
//!
//! 1. Explicit override parameter (tests)
//! 2. CLI arguments (`--data-dir`, `--config-dir`), set once via
//!    [`init_cli_overrides`]
//! 3. Environment variables (`REELSBOOK_DATA_DIR`, `REELSBOOK_CONFIG_DIR`)
//! 4. Platform default via the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended under the platform data and config roots.
const APP_NAME: &str = "ReelsBook";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "REELSBOOK_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "REELSBOOK_CONFIG_DIR";

struct CliPaths {
    data_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
}

static CLI_PATHS: OnceLock<CliPaths> = OnceLock::new();

/// Stores the `--data-dir` / `--config-dir` CLI values.
///
/// Must be called at most once, before any path resolution happens.
///
/// # Panics
///
/// Panics when called a second time.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let paths = CliPaths {
        data_dir: data_dir.map(PathBuf::from),
        config_dir: config_dir.map(PathBuf::from),
    };
    if CLI_PATHS.set(paths).is_err() {
        panic!("CLI path overrides already initialized");
    }
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_PATHS.get().and_then(|paths| paths.data_dir.clone())
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_PATHS.get().and_then(|paths| paths.config_dir.clone())
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Directory for application state (cached session, last directories).
///
/// Returns `None` when the platform data directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Like [`get_app_data_dir`], but an explicit path wins over everything.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_NAME)))
}

/// Directory for user preferences (`settings.toml`).
///
/// Returns `None` when the platform config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], but an explicit path wins over everything.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Serializes tests that touch process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap()
    }

    #[test]
    fn platform_defaults_end_with_the_app_name() {
        let _guard = env_guard();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for dir in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(dir.is_absolute());
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _guard = env_guard();
        std::env::set_var(ENV_DATA_DIR, "/srv/reelsbook/data");

        let resolved = get_app_data_dir();
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(resolved, Some(PathBuf::from("/srv/reelsbook/data")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _guard = env_guard();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let resolved = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(dir) = resolved {
            assert_ne!(dir, PathBuf::new());
        }
    }

    #[test]
    fn explicit_override_takes_precedence() {
        let _guard = env_guard();
        std::env::set_var(ENV_DATA_DIR, "/srv/reelsbook/ignored");

        let wanted = PathBuf::from("/srv/reelsbook/explicit");
        let resolved = get_app_data_dir_with_override(Some(wanted.clone()));
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(resolved, Some(wanted));
    }

    #[test]
    fn explicit_override_applies_to_the_config_dir_too() {
        let wanted = PathBuf::from("/srv/reelsbook/config");
        let resolved = get_app_config_dir_with_override(Some(wanted.clone()));
        assert_eq!(resolved, Some(wanted));
    }
}
