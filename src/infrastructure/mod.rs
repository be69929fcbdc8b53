// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`http`]: Image list and image bytes over HTTP (implements [`ImageSource`])
//!
//! [`ImageSource`]: crate::application::port::ImageSource

pub mod http;

// Re-export main types for convenience
pub use http::{parse_image_list, HttpImageSource};
