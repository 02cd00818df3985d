// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of the [`SessionGateway`] port.
//!
//! The desktop client does not run the sign-in flow itself; it is handed the
//! already-established session (restored from persisted state) and only ever
//! tells the backend to end it. Sign-out clears the local session on success
//! and leaves it untouched on failure, matching what the UI reports.
//!
//! [`SessionGateway`]: crate::application::port::SessionGateway

use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::port::{SessionError, SessionGateway};
use crate::domain::Session;

use super::{build_client, error_parts};

/// Session holder backed by the backend's sign-out route.
pub struct HttpSessionGateway {
    client: reqwest::Client,
    base_url: String,
    session: RwLock<Option<Session>>,
}

impl HttpSessionGateway {
    /// Creates a gateway for `base_url`, seeded with the restored session.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: Option<Session>,
    ) -> crate::Result<Self> {
        Ok(Self {
            client: build_client(Some(timeout))?,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: RwLock::new(session),
        })
    }

    fn sign_out_url(&self) -> String {
        format!("{}/api/auth/signout", self.base_url)
    }
}

#[async_trait]
impl SessionGateway for HttpSessionGateway {
    fn current(&self) -> Option<Session> {
        self.session.read().map(|guard| guard.clone()).unwrap_or(None)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        let response = self
            .client
            .post(self.sign_out_url())
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(SessionError::Backend { status, message });
        }

        if let Ok(mut guard) = self.session.write() {
            *guard = None;
        }

        Ok(())
    }
}
