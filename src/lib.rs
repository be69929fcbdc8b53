// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` shows eight remotely listed images in a responsive grid
//! built with the Iced GUI framework.
//!
//! The grid re-arranges itself when the window width crosses a breakpoint
//! (8×1, 4×2 or 2×4), and pressing a cell opens a full-window presentation
//! overlay with wraparound previous/next navigation.
//!
//! # Layers
//!
//! - [`domain`] - Size classes, image indices and the eight-image set
//! - [`application`] - Viewport watcher, grid renderer, presentation controller
//!   and the image source port
//! - [`infrastructure`] - HTTP adapter for the image source
//! - [`ui`] - Iced views and styles
//! - [`app`] - Iced application wiring

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
