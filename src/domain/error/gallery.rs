// SPDX-License-Identifier: MPL-2.0
//! Errors raised by the gallery core.
//!
//! Every variant is a precondition failure: it is returned before any state
//! is mutated, and retrying with the same input yields the same error.

use std::fmt;

/// Precondition violations detected by the gallery core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// An image set did not contain exactly the required number of URLs.
    WrongImageCount {
        /// Number of URLs the gallery requires.
        expected: usize,
        /// Number of URLs actually supplied.
        actual: usize,
    },

    /// An image index outside the gallery bounds was requested.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::WrongImageCount { .. } => "error-gallery-wrong-count",
            GalleryError::IndexOutOfRange { .. } => "error-gallery-index",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::WrongImageCount { expected, actual } => {
                write!(f, "Expected exactly {expected} image URLs, got {actual}")
            }
            GalleryError::IndexOutOfRange { index } => {
                write!(f, "Image index {index} is out of range")
            }
        }
    }
}

impl std::error::Error for GalleryError {}
