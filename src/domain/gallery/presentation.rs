// SPDX-License-Identifier: MPL-2.0
//! Presentation overlay state.

use super::newtypes::ImageIndex;

/// Whether the overlay is visible and which image it shows.
///
/// The index is kept while closed so the last position is still known,
/// but it only matters again once the overlay is reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub is_open: bool,
    pub current_index: ImageIndex,
}

impl PresentationState {
    /// Initial state: closed, positioned on the first image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shown index while open.
    #[must_use]
    pub fn open_index(&self) -> Option<ImageIndex> {
        self.is_open.then_some(self.current_index)
    }
}
