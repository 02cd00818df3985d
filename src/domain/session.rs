// SPDX-License-Identifier: MPL-2.0
//! Signed-in account types.

/// The account whose session this client holds.
///
/// Absence of a `Session` means signed out; there is no intermediate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Short label shown in the account menu: the part of the email before
    /// the first `@`. An address without `@` is shown whole.
    #[must_use]
    pub fn account_label(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}
