// SPDX-License-Identifier: MPL-2.0
//! Application layer: capability interfaces.
//!
//! Holds the [`port`] traits the UI drives and the infrastructure implements.
//!
//! # Layering
//!
//! - This layer only uses domain types; nothing here knows about HTTP
//! - `infrastructure` implements the ports
//! - The presentation layer holds ports as `Arc<dyn ...>` and drives them
//!   through iced tasks, which is also how tests substitute fakes

pub mod port;
