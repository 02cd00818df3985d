// SPDX-License-Identifier: MPL-2.0
//! Top-level screens the app can show.

/// Where the user currently is; the navbar and back links switch between these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Feed,
    Upload,
    Detail,
    Login,
}
