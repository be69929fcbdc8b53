// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler receives an [`UpdateContext`] borrowing the pieces of `App`
//! it may touch, applies the change synchronously, and returns the follow-up
//! [`Task`] (fetches and downloads), if any.

use super::screen::{GalleryScreen, Screen};
use super::Message;
use crate::application::gallery::{Display, PresentationController, ViewportWatcher};
use crate::application::port::{ImageSource, SourceError};
use crate::domain::gallery::{ImageIndex, ImageSet};
use crate::ui::gallery_grid::Thumbnail;
use iced::widget::image::Handle;
use iced::{Size, Task};
use std::sync::Arc;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub viewport: &'a mut ViewportWatcher,
    pub generation: &'a mut u64,
    pub source: Option<&'a Arc<dyn ImageSource>>,
}

/// Starts a new image list fetch, superseding any fetch still in flight.
pub fn start_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.generation += 1;
    let generation = *ctx.generation;

    let Some(source) = ctx.source else {
        log::warn!("no image source available");
        *ctx.screen = Screen::Failed(SourceError::Network("HTTP client unavailable".into()));
        return Task::none();
    };

    *ctx.screen = Screen::Loading;
    Task::perform(source.fetch(), move |result| Message::ImageListLoaded {
        generation,
        result,
    })
}

pub fn handle_retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    log::info!("retrying image list fetch");
    start_fetch(ctx)
}

pub fn handle_image_list_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<ImageSet, SourceError>,
) -> Task<Message> {
    if generation != *ctx.generation {
        log::debug!("ignoring image list from stale fetch {generation}");
        return Task::none();
    }

    match result {
        Ok(images) => {
            log::info!("image list loaded ({} images)", images.len());
            let downloads = download_images(ctx.source, &images, generation);
            let gallery = GalleryScreen::new(images, ctx.viewport.size_class());
            *ctx.screen = Screen::Gallery(Box::new(gallery));
            downloads
        }
        Err(err) => {
            log::warn!("image list fetch failed: {err}");
            *ctx.screen = Screen::Failed(err);
            Task::none()
        }
    }
}

fn download_images(
    source: Option<&Arc<dyn ImageSource>>,
    images: &ImageSet,
    generation: u64,
) -> Task<Message> {
    let Some(source) = source else {
        return Task::none();
    };

    Task::batch(images.iter().map(|(index, url)| {
        Task::perform(source.fetch_image(url), move |result| {
            Message::ImageLoaded {
                generation,
                index,
                result,
            }
        })
    }))
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    index: ImageIndex,
    result: Result<Vec<u8>, SourceError>,
) -> Task<Message> {
    if generation != *ctx.generation {
        return Task::none();
    }
    let Some(gallery) = ctx.screen.gallery_mut() else {
        return Task::none();
    };

    let thumbnail = match result {
        Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
        Err(err) => {
            log::warn!("image {index} unavailable: {err}");
            Thumbnail::Unavailable
        }
    };
    gallery.set_thumbnail(index, thumbnail);
    Task::none()
}

/// Feeds the new width to the viewport watcher and relays out the grid when
/// the size class changed.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let Some(class) = ctx.viewport.resize(size.width) else {
        return Task::none();
    };
    if let Some(gallery) = ctx.screen.gallery_mut() {
        gallery.relayout(class);
    }
    Task::none()
}

pub fn handle_cell_pressed(ctx: &mut UpdateContext<'_>, index: ImageIndex) -> Task<Message> {
    if let Some(gallery) = ctx.screen.gallery_mut() {
        let display = gallery.presentation.open_index(index);
        trace_display(&display);
    }
    Task::none()
}

pub fn handle_close(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    step_presentation(ctx, |presentation| presentation.close())
}

pub fn handle_previous(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    step_presentation(ctx, |presentation| presentation.previous())
}

pub fn handle_next(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    step_presentation(ctx, |presentation| presentation.next())
}

fn step_presentation<F>(ctx: &mut UpdateContext<'_>, step: F) -> Task<Message>
where
    F: FnOnce(&mut PresentationController) -> Option<Display>,
{
    if let Some(display) = ctx
        .screen
        .gallery_mut()
        .and_then(|gallery| step(&mut gallery.presentation))
    {
        trace_display(&display);
    }
    Task::none()
}

fn trace_display(display: &Display) {
    match display {
        Display::Show { index, url } => log::trace!("showing image {index}: {url}"),
        Display::Hide => log::trace!("overlay hidden"),
    }
}
