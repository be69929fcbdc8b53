// SPDX-License-Identifier: MPL-2.0
//! Screens of the image list lifecycle.

use crate::application::gallery::{GridLayout, GridRenderer, PresentationController};
use crate::application::port::SourceError;
use crate::domain::gallery::{ImageIndex, ImageSet, SizeClass, IMAGE_COUNT};
use crate::ui::gallery_grid::Thumbnail;
use std::fmt;

/// What the window currently shows.
///
/// The grid only exists once the image list has been fetched, so cells and
/// overlay controls cannot emit anything before then.
#[derive(Debug, Default)]
pub enum Screen {
    /// Waiting for the image list.
    #[default]
    Loading,
    /// The image list fetch failed; the user may retry.
    Failed(SourceError),
    /// Grid (and possibly the overlay) is displayed.
    Gallery(Box<GalleryScreen>),
}

impl Screen {
    #[must_use]
    pub fn gallery(&self) -> Option<&GalleryScreen> {
        match self {
            Screen::Gallery(gallery) => Some(gallery),
            _ => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut GalleryScreen> {
        match self {
            Screen::Gallery(gallery) => Some(gallery),
            _ => None,
        }
    }
}

/// State of a loaded gallery.
pub struct GalleryScreen {
    pub layout: GridLayout,
    pub presentation: PresentationController,
    /// One entry per image, indexed by [`ImageIndex`].
    pub thumbnails: Vec<Thumbnail>,
}

impl GalleryScreen {
    /// Lays out a freshly fetched image set for the given size class.
    #[must_use]
    pub fn new(images: ImageSet, size_class: SizeClass) -> Self {
        Self {
            layout: GridRenderer::render_set(&images, size_class),
            presentation: PresentationController::new(images),
            thumbnails: vec![Thumbnail::Loading; IMAGE_COUNT],
        }
    }

    /// Replaces the layout wholesale for a new size class.
    pub fn relayout(&mut self, size_class: SizeClass) {
        self.layout = GridRenderer::render_set(self.presentation.images(), size_class);
    }

    #[must_use]
    pub fn thumbnail(&self, index: ImageIndex) -> &Thumbnail {
        &self.thumbnails[index.value()]
    }

    pub fn set_thumbnail(&mut self, index: ImageIndex, thumbnail: Thumbnail) {
        self.thumbnails[index.value()] = thumbnail;
    }
}

impl fmt::Debug for GalleryScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryScreen")
            .field("size_class", &self.layout.size_class())
            .field("presentation", &self.presentation.state())
            .finish()
    }
}
