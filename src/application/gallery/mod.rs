// SPDX-License-Identifier: MPL-2.0
//! Gallery services: viewport tracking, grid layout, and presentation.
//!
//! These are the stateful pieces the composition root owns. Each one is an
//! explicit object held by the application rather than ambient window state.

pub mod grid;
pub mod presentation;
pub mod viewport;

// Re-export main types for convenience
pub use grid::{render, GridCell, GridLayout, GridRenderer, GRID_ID};
pub use presentation::{Display, PresentationController};
pub use viewport::ViewportWatcher;
