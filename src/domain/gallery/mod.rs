// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! Size classes, the fixed-size image set, and the presentation state.
//! These types know nothing about widgets or HTTP.

pub mod image_set;
pub mod newtypes;
pub mod presentation;
pub mod size_class;

// Re-export commonly used types
pub use image_set::ImageSet;
pub use newtypes::{ImageIndex, IMAGE_COUNT};
pub use presentation::PresentationState;
pub use size_class::{classify, SizeClass, MEDIUM_MAX_WIDTH, SMALL_MAX_WIDTH};
