// SPDX-License-Identifier: MPL-2.0
//! Image source port definition.
//!
//! This module defines the [`ImageSource`] trait that supplies the gallery's
//! image URLs and the bytes behind them. The HTTP adapter lives in `infrastructure::http`; tests use
//! in-memory implementations.

use crate::domain::error::GalleryError;
use crate::domain::gallery::ImageSet;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// SourceError
// =============================================================================

/// Errors that can occur while obtaining the image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The request could not be sent or the connection failed.
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    Status(u16),

    /// The payload was not a list of strings.
    Parse(String),

    /// The payload was a list of strings of the wrong length.
    Contract(GalleryError),
}

impl SourceError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SourceError::Network(_) => "error-source-network",
            SourceError::Status(_) => "error-source-status",
            SourceError::Parse(_) => "error-source-parse",
            SourceError::Contract(err) => err.i18n_key(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {msg}"),
            SourceError::Status(code) => write!(f, "HTTP status: {code}"),
            SourceError::Parse(msg) => write!(f, "Invalid image list: {msg}"),
            SourceError::Contract(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<GalleryError> for SourceError {
    fn from(err: GalleryError) -> Self {
        SourceError::Contract(err)
    }
}

// =============================================================================
// ImageSource Trait
// =============================================================================

/// Port for obtaining the ordered list of gallery image URLs.
///
/// A single asynchronous operation that resolves to an [`ImageSet`] or fails.
/// Implementations never retry, pad, or truncate; the caller decides what to
/// do with a failure.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the returned future can run on
/// the runtime behind Iced's `Task::perform`.
///
/// # Example
///
/// ```ignore
/// use iced_gallery::application::port::ImageSource;
///
/// async fn first_url(source: &impl ImageSource) -> Option<String> {
///     let set = source.fetch().await.ok()?;
///     set.urls().first().cloned()
/// }
/// ```
pub trait ImageSource: Send + Sync {
    /// Fetches the image list.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if:
    /// - The endpoint cannot be reached
    /// - The response status is not a success
    /// - The payload is not a list of strings
    /// - The list does not hold exactly eight URLs
    fn fetch(&self) -> BoxFuture<'static, Result<ImageSet, SourceError>>;

    /// Downloads the raw bytes of one image from the list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Network`] or [`SourceError::Status`] when the
    /// image cannot be downloaded.
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>, SourceError>>;
}
