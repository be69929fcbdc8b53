// SPDX-License-Identifier: MPL-2.0
//! The ordered set of image URLs shown by the gallery.

use super::newtypes::{ImageIndex, IMAGE_COUNT};
use crate::domain::error::GalleryError;
use std::sync::Arc;

/// Exactly [`IMAGE_COUNT`] image URLs, in display order.
///
/// The length is checked once at construction; any other length is a
/// contract violation and is reported, never padded or truncated.
/// Cloning is cheap: the URLs are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    urls: Arc<[String; IMAGE_COUNT]>,
}

impl ImageSet {
    /// Builds a set from any list of URL-like strings.
    pub fn from_urls<I, S>(urls: I) -> Result<Self, GalleryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let urls: Vec<String> = urls.into_iter().map(Into::into).collect();
        Self::try_from(urls)
    }

    /// Returns the URL at the given position.
    #[must_use]
    pub fn url(&self, index: ImageIndex) -> &str {
        &self.urls[index.value()]
    }

    /// Returns all URLs in display order.
    #[must_use]
    pub fn urls(&self) -> &[String] {
        self.urls.as_slice()
    }

    /// Iterates over `(index, url)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageIndex, &str)> {
        ImageIndex::all().zip(self.urls.iter().map(String::as_str))
    }

    /// Always [`IMAGE_COUNT`].
    #[must_use]
    pub fn len(&self) -> usize {
        IMAGE_COUNT
    }

    /// Always `false`: a set never holds fewer than [`IMAGE_COUNT`] URLs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<String>> for ImageSet {
    type Error = GalleryError;

    fn try_from(urls: Vec<String>) -> Result<Self, Self::Error> {
        let actual = urls.len();
        let urls: [String; IMAGE_COUNT] = urls
            .try_into()
            .map_err(|_| GalleryError::WrongImageCount {
                expected: IMAGE_COUNT,
                actual,
            })?;
        Ok(Self {
            urls: Arc::new(urls),
        })
    }
}

impl TryFrom<&[&str]> for ImageSet {
    type Error = GalleryError;

    fn try_from(urls: &[&str]) -> Result<Self, Self::Error> {
        Self::from_urls(urls.iter().copied())
    }
}
