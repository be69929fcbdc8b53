// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`GalleryError`](error::GalleryError))
//! - [`gallery`]: Gallery types ([`SizeClass`](gallery::SizeClass),
//!   [`ImageSet`](gallery::ImageSet), [`ImageIndex`](gallery::ImageIndex),
//!   [`PresentationState`](gallery::PresentationState))

pub mod error;
pub mod gallery;
