// SPDX-License-Identifier: MPL-2.0
//! `reelsbook` is a desktop client for the ReelsBook short-video sharing
//! service, built with the Iced GUI framework.
//!
//! It browses the service's video feed, plays portrait clips, and publishes
//! new videos with live upload progress. The backend is reached through the
//! ports in [`application`], implemented over HTTP in [`infrastructure`].

#![doc(html_root_url = "https://docs.rs/reelsbook/0.2.0")]

pub mod app;
pub mod application;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

pub use error::{Error, Result};
