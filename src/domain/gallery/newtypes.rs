// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery values,
//! ensuring they are always within valid ranges.

use crate::domain::error::GalleryError;
use std::fmt;

/// Number of images the gallery displays. Fixed; never configurable.
pub const IMAGE_COUNT: usize = 8;

// =============================================================================
// ImageIndex
// =============================================================================

/// Position of an image in the gallery, guaranteed to be in `0..IMAGE_COUNT`.
///
/// Navigation wraps in both directions, so stepping never leaves the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ImageIndex(usize);

impl ImageIndex {
    /// The first image.
    pub const FIRST: Self = Self(0);

    /// The last image.
    pub const LAST: Self = Self(IMAGE_COUNT - 1);

    /// Creates an index, rejecting values outside the gallery.
    pub fn new(index: usize) -> Result<Self, GalleryError> {
        if index < IMAGE_COUNT {
            Ok(Self(index))
        } else {
            Err(GalleryError::IndexOutOfRange { index })
        }
    }

    /// Returns the raw index value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns the following index, wrapping from the last to the first.
    #[must_use]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % IMAGE_COUNT)
    }

    /// Returns the preceding index, wrapping from the first to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        Self((self.0 + IMAGE_COUNT - 1) % IMAGE_COUNT)
    }

    /// Iterates over every index in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..IMAGE_COUNT).map(Self)
    }
}

impl TryFrom<usize> for ImageIndex {
    type Error = GalleryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<ImageIndex> for usize {
    fn from(index: ImageIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ImageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
