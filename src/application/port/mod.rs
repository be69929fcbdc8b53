// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`image_source`]: Retrieval of the gallery image list
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so results can cross into Iced tasks
//! - Async operations return a boxed future that callers hand to `Task::perform`

pub mod image_source;

// Re-export main types for convenience
pub use image_source::{ImageSource, SourceError};
