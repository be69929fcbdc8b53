// SPDX-License-Identifier: MPL-2.0
//! Presentation overlay state machine.
//!
//! Two states, `Closed` and `Open(index)`, with no terminal state. Opening
//! works from either state; close, previous, and next are no-ops while
//! closed. Stepping wraps around the eight images in both directions.

use crate::domain::error::GalleryError;
use crate::domain::gallery::{ImageIndex, ImageSet, PresentationState};
use std::fmt;

/// What the rendering layer should show after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// Make the overlay visible with this image.
    Show { index: ImageIndex, url: String },
    /// Hide the overlay.
    Hide,
}

type DisplayCallback = Box<dyn FnMut(&Display)>;

/// Owns the [`PresentationState`] and applies navigation events to it.
pub struct PresentationController {
    images: ImageSet,
    state: PresentationState,
    listener: Option<DisplayCallback>,
}

impl PresentationController {
    /// Creates a closed controller over the given images.
    #[must_use]
    pub fn new(images: ImageSet) -> Self {
        Self {
            images,
            state: PresentationState::new(),
            listener: None,
        }
    }

    /// Registers the display listener, replacing any previous one.
    ///
    /// The listener receives every [`Display`] produced by a transition.
    pub fn on_display<F>(&mut self, listener: F)
    where
        F: FnMut(&Display) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Replaces the image set, e.g. after a reload.
    ///
    /// The current index stays valid because every set has the same length.
    /// If the overlay is open, it is refreshed with the new URL.
    pub fn set_images(&mut self, images: ImageSet) -> Option<Display> {
        self.images = images;
        self.state.is_open.then(|| self.show(self.state.current_index))
    }

    /// Opens the overlay on the image of a clicked cell.
    ///
    /// Rejects indices outside the gallery without touching the state.
    pub fn open(&mut self, index: usize) -> Result<Display, GalleryError> {
        let index = ImageIndex::new(index)?;
        Ok(self.open_index(index))
    }

    /// Opens the overlay on `index`, from either state.
    pub fn open_index(&mut self, index: ImageIndex) -> Display {
        log::debug!("presentation open at {index}");
        self.state = PresentationState {
            is_open: true,
            current_index: index,
        };
        self.show(index)
    }

    /// Hides the overlay. No-op while closed.
    pub fn close(&mut self) -> Option<Display> {
        if !self.state.is_open {
            return None;
        }
        log::debug!("presentation closed at {}", self.state.current_index);
        self.state.is_open = false;
        let display = Display::Hide;
        self.notify(&display);
        Some(display)
    }

    /// Steps to the previous image, wrapping from the first to the last.
    /// No-op while closed.
    pub fn previous(&mut self) -> Option<Display> {
        self.step(ImageIndex::previous)
    }

    /// Steps to the next image, wrapping from the last to the first.
    /// No-op while closed.
    pub fn next(&mut self) -> Option<Display> {
        self.step(ImageIndex::next)
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> ImageIndex {
        self.state.current_index
    }

    /// URL of the shown image, only while open.
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        self.state
            .open_index()
            .map(|index| self.images.url(index))
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    fn step(&mut self, advance: fn(ImageIndex) -> ImageIndex) -> Option<Display> {
        let current = self.state.open_index()?;
        let target = advance(current);
        log::debug!("presentation {current} -> {target}");
        self.state.current_index = target;
        Some(self.show(target))
    }

    fn show(&mut self, index: ImageIndex) -> Display {
        let display = Display::Show {
            index,
            url: self.images.url(index).to_owned(),
        };
        self.notify(&display);
        display
    }

    fn notify(&mut self, display: &Display) {
        if let Some(listener) = self.listener.as_mut() {
            listener(display);
        }
    }
}

impl fmt::Debug for PresentationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationController")
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
