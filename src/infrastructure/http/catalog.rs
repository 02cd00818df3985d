// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of the [`VideoCatalog`] port.
//!
//! Talks to the `/api/videos` routes of the ReelsBook backend. Listing is
//! public; publication is authorised with an optional bearer token so headless
//! deployments can wire one in from the environment.
//!
//! [`VideoCatalog`]: crate::application::port::VideoCatalog

use std::time::Duration;

use async_trait::async_trait;

use crate::application::port::{CatalogError, VideoCatalog};
use crate::domain::{NewVideo, VideoAsset};

use super::{build_client, error_parts};

/// REST client for the backend's video collection.
pub struct HttpVideoCatalog {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpVideoCatalog {
    /// Creates a catalog client for `base_url`.
    ///
    /// A trailing slash on `base_url` is normalised away so route joining
    /// stays predictable. Every request is bounded by `timeout`.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        bearer_token: Option<String>,
    ) -> crate::Result<Self> {
        Ok(Self {
            client: build_client(Some(timeout))?,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    fn videos_url(&self) -> String {
        format!("{}/api/videos", self.base_url)
    }

    fn authorised(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl VideoCatalog for HttpVideoCatalog {
    async fn create_video(&self, draft: &NewVideo) -> Result<(), CatalogError> {
        let response = self
            .authorised(self.client.post(self.videos_url()))
            .json(draft)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(CatalogError::Backend { status, message });
        }

        Ok(())
    }

    async fn list_videos(&self) -> Result<Vec<VideoAsset>, CatalogError> {
        let response = self
            .authorised(self.client.get(self.videos_url()))
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = error_parts(response).await;
            return Err(CatalogError::Backend { status, message });
        }

        response
            .json::<Vec<VideoAsset>>()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(base_url: &str) -> HttpVideoCatalog {
        HttpVideoCatalog::new(base_url, Duration::from_secs(5), None)
            .expect("client should build")
    }

    #[test]
    fn joins_the_videos_route_onto_the_base_url() {
        assert_eq!(
            catalog("http://localhost:3000").videos_url(),
            "http://localhost:3000/api/videos"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_normalised() {
        assert_eq!(
            catalog("http://localhost:3000/").videos_url(),
            "http://localhost:3000/api/videos"
        );
    }
}
