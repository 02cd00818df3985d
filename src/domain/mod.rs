// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the app's core vocabulary.
//!
//! Pure data types and business rules, independent of any presentation or
//! infrastructure concern. The only external dependencies are the serde
//! derives (these types define the backend wire format) and chrono for
//! timestamps.
//!
//! # Modules
//!
//! - [`session`]: Signed-in account types ([`Session`](session::Session))
//! - [`video`]: Video asset types ([`VideoAsset`](video::VideoAsset),
//!   [`NewVideo`](video::NewVideo), [`VideoId`](video::VideoId),
//!   [`Resolution`](video::Resolution))

pub mod session;
pub mod video;

pub use session::Session;
pub use video::{NewVideo, Resolution, VideoAsset, VideoId, PORTRAIT};
