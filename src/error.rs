// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type for startup and persistence paths.
//!
//! Runtime request failures stay inside the port-specific error enums
//! (`CatalogError`, `SessionError`, `UploadError`); this type covers what can
//! go wrong before the UI is up or while touching local files.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Local filesystem failure (state file, config file).
    Io(String),
    /// Config file exists but cannot be parsed or written back.
    Config(String),
    /// Backend connectivity failure outside the port layer.
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "i/o error: {e}"),
            Error::Config(e) => write!(f, "config error: {e}"),
            Error::Backend(e) => write!(f, "backend error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Backend(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
