// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Everything visual lives here, written Elm-style: screens own their state,
//! emit messages upward, and the app routes updates back down.
//!
//! # Screens
//!
//! - [`feed`] - Video feed grid with poster cards
//! - [`detail`] - Single-video playback screen
//! - [`upload_form`] - Upload and publish form
//! - [`login`] - Sign-in placeholder screen
//!
//! # Shared Infrastructure
//!
//! - [`video_card`] - Feed card for one video asset
//! - [`player`] - Poster-based player stage
//! - [`styles`] - Button and container styling shared across screens
//! - [`design_tokens`] - The visual constants vocabulary
//! - [`theme`] - Color helpers for status text and the player stage
//! - [`theming`] - Light/dark/system mode resolution
//! - [`navbar`] - Brand link plus the session-dependent account menu
//! - [`notifications`] - Toast stack with backlog and diagnostics feed

pub mod design_tokens;
pub mod detail;
pub mod feed;
pub mod login;
pub mod navbar;
pub mod notifications;
pub mod player;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod upload_form;
pub mod video_card;
