// SPDX-License-Identifier: MPL-2.0
//! Localized UI strings.
//!
//! Localization is built on the Fluent system: translation files are embedded
//! at build time, the locale is resolved from CLI, config, or the OS, and
//! strings are formatted at runtime (optionally with arguments).

pub mod fluent;

pub use fluent::I18n;
