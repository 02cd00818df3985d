// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Single source of truth for the defaults used across the application,
//! organized by category.

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Default base URL of the ReelsBook backend.
///
/// Matches the development server address of the reference web deployment;
/// production installs override it via `[backend] base_url` or `--api-url`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default timeout for backend requests (in seconds).
///
/// Applies to catalog calls only. Uploads stream for as long as they need
/// and are not subject to this timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum backend request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum backend request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Default upload chunk size in kibibytes.
///
/// Each chunk produces at most one progress update, so smaller chunks give
/// smoother progress for slow links at the cost of more syscalls.
pub const DEFAULT_UPLOAD_CHUNK_KB: u32 = 256;

/// Minimum upload chunk size in kibibytes.
pub const MIN_UPLOAD_CHUNK_KB: u32 = 16;

/// Maximum upload chunk size in kibibytes.
pub const MAX_UPLOAD_CHUNK_KB: u32 = 8192;

// Compile-time validation of constant relationships.
const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(MIN_UPLOAD_CHUNK_KB > 0);
    assert!(MAX_UPLOAD_CHUNK_KB >= MIN_UPLOAD_CHUNK_KB);
    assert!(DEFAULT_UPLOAD_CHUNK_KB >= MIN_UPLOAD_CHUNK_KB);
    assert!(DEFAULT_UPLOAD_CHUNK_KB <= MAX_UPLOAD_CHUNK_KB);

    assert!(!DEFAULT_API_BASE_URL.is_empty());
};
