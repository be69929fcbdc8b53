// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SourceError;
use crate::domain::gallery::{ImageIndex, ImageSet};
use crate::ui::gallery_grid;
use crate::ui::presentation_overlay;
use iced::Size;

/// Top-level messages consumed by `App::update`. Component messages are
/// flattened into these variants so there is a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A grid cell was pressed; carries the image bound to that cell.
    CellPressed(ImageIndex),
    ClosePressed,
    PreviousPressed,
    NextPressed,
    /// Re-issue the image list fetch after a failure.
    RetryPressed,
    WindowResized(Size),
    /// The image list fetch of the given generation finished.
    ImageListLoaded {
        generation: u64,
        result: Result<ImageSet, SourceError>,
    },
    /// One image's bytes finished downloading.
    ImageLoaded {
        generation: u64,
        index: ImageIndex,
        result: Result<Vec<u8>, SourceError>,
    },
}

impl From<gallery_grid::Message> for Message {
    fn from(message: gallery_grid::Message) -> Self {
        match message {
            gallery_grid::Message::CellPressed(index) => Message::CellPressed(index),
        }
    }
}

impl From<presentation_overlay::Message> for Message {
    fn from(message: presentation_overlay::Message) -> Self {
        match message {
            presentation_overlay::Message::Close => Message::ClosePressed,
            presentation_overlay::Message::Previous => Message::PreviousPressed,
            presentation_overlay::Message::Next => Message::NextPressed,
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image list URL; replaces `[source].endpoint` for this session.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
