// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! takes a borrowed `ViewContext` and emits its own `Message` type that the
//! application maps into its top-level message.
//!
//! - [`gallery_grid`] - The responsive image grid
//! - [`presentation_overlay`] - Full-window image with close/previous/next
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_grid;
pub mod presentation_overlay;
pub mod styles;
pub mod theming;
