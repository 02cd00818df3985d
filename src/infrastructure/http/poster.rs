// SPDX-License-Identifier: MPL-2.0
//! Best-effort poster frame downloads for feed cards.

use super::build_client;
use std::time::Duration;

/// Posters are small; anything slower than this is treated as a miss.
const POSTER_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a stored media reference against the backend base URL.
///
/// Catalog entries may carry absolute CDN URLs or server-relative paths;
/// absolute references pass through untouched.
pub(crate) fn resolve_media_url(base_url: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    let base = base_url.trim_end_matches('/');
    if reference.starts_with('/') {
        format!("{base}{reference}")
    } else {
        format!("{base}/{reference}")
    }
}

/// Downloads one poster frame and returns its raw bytes.
///
/// Failures come back as plain strings: the caller records them as
/// diagnostics warnings and keeps the card's placeholder surface.
pub async fn fetch_poster(base_url: &str, reference: &str) -> Result<Vec<u8>, String> {
    let url = resolve_media_url(base_url, reference);

    let client = build_client(Some(POSTER_TIMEOUT)).map_err(|error| error.to_string())?;
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|error| error.to_string())?;

    if !response.status().is_success() {
        return Err(format!("{url}: HTTP {}", response.status().as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|error| error.to_string())?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_references_pass_through() {
        assert_eq!(
            resolve_media_url(
                "http://localhost:3000",
                "https://cdn.example.com/thumbs/a.jpg"
            ),
            "https://cdn.example.com/thumbs/a.jpg"
        );
    }

    #[test]
    fn server_relative_references_join_the_base() {
        assert_eq!(
            resolve_media_url("http://localhost:3000", "/thumbs/a.jpg"),
            "http://localhost:3000/thumbs/a.jpg"
        );
    }

    #[test]
    fn bare_references_get_a_separating_slash() {
        assert_eq!(
            resolve_media_url("http://localhost:3000/", "thumbs/a.jpg"),
            "http://localhost:3000/thumbs/a.jpg"
        );
    }
}
