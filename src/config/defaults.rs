// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Image Source Defaults
// ==========================================================================

/// Endpoint queried for the image list when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://example.com/gallery/images.json";

/// Default request timeout for the image list and image downloads (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 120;

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width. Large enough to start in the widest layout.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;

/// Initial window height.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Smallest window width the user can resize to.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height the user can resize to.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

const _: () = {
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
};
