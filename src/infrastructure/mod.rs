// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the `application::port` traits. Everything
//! that speaks HTTP to the ReelsBook backend lives here, keeping `reqwest`
//! plumbing out of the rest of the crate.
//!
//! - [`http::HttpVideoCatalog`]: video listing and publication
//! - [`http::CdnUploader`]: streaming media upload with progress
//! - [`http::HttpSessionGateway`]: session lookup and sign-out
//!
//! `main` decides the wiring; the rest of the app only ever sees the ports
//! as `Arc<dyn Trait>`.

pub mod http;

pub use http::{CdnUploader, HttpSessionGateway, HttpVideoCatalog};
