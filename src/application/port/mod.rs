// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Abstract interfaces that infrastructure adapters implement. The traits use
//! domain types only, so the UI and tests never depend on concrete HTTP
//! plumbing.
//!
//! # Available Ports
//!
//! - [`catalog`]: The backend video API (create, list)
//! - [`session`]: Account session access and sign-out
//! - [`upload`]: Media transfer to the storage service with progress
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync`; the app holds them as `Arc<dyn ...>`
//! - Async operations use `async_trait` so the traits stay object-safe
//! - Each port has its own error enum implementing `std::error::Error`;
//!   `Display` output is what notifications show the user

pub mod catalog;
pub mod session;
pub mod upload;

// Re-export main types for convenience
pub use catalog::{CatalogError, VideoCatalog};
pub use session::{SessionError, SessionGateway};
pub use upload::{MediaUploader, TransferRequest, UploadError, UploadReceipt};
