// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`gallery`]: Viewport watcher, grid renderer, and presentation controller
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_gallery::application::gallery::{GridRenderer, ViewportWatcher};
//!
//! let mut watcher = ViewportWatcher::new(1024.0);
//! watcher.subscribe(|class| println!("layout is now {class}"));
//! let layout = GridRenderer::render_set(&images, watcher.size_class());
//! ```

pub mod gallery;
pub mod port;
