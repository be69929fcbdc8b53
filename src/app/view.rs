// SPDX-License-Identifier: MPL-2.0
//! Rendering of the application screens.

use super::screen::{GalleryScreen, Screen};
use super::Message;
use crate::application::port::SourceError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery_grid;
use crate::ui::presentation_overlay;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Stack, Text},
    Element, Length,
};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    /// i18n key of a startup warning shown above the content.
    pub warning: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = match ctx.screen {
        Screen::Loading => view_loading(ctx.i18n),
        Screen::Failed(err) => view_failed(ctx.i18n, err),
        Screen::Gallery(gallery) => view_gallery(ctx.i18n, gallery),
    };

    match ctx.warning {
        Some(key) => Column::new()
            .push(
                Container::new(
                    Text::new(ctx.i18n.tr(key))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .padding([spacing::XXS, spacing::XS]),
            )
            .push(content)
            .into(),
        None => content,
    }
}

fn view_loading<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(Text::new(i18n.tr("gallery-loading")).size(typography::TITLE_MD))
}

fn view_failed<'a>(i18n: &I18n, err: &SourceError) -> Element<'a, Message> {
    let headline = Text::new(i18n.tr("gallery-load-failed")).size(typography::TITLE_MD);
    let reason = Container::new(Text::new(i18n.tr(err.i18n_key())).size(typography::BODY))
        .style(styles::container::error_text);
    let retry = button(Text::new(i18n.tr("gallery-retry")).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::RetryPressed);

    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(headline)
            .push(reason)
            .push(retry),
    )
}

fn view_gallery<'a>(i18n: &'a I18n, gallery: &'a GalleryScreen) -> Element<'a, Message> {
    let grid = gallery_grid::view(gallery_grid::ViewContext {
        i18n,
        layout: &gallery.layout,
        thumbnails: &gallery.thumbnails,
    })
    .map(Message::from);

    let mut stack = Stack::new()
        .push(grid)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(index) = gallery.presentation.state().open_index() {
        let overlay = presentation_overlay::view(presentation_overlay::ViewContext {
            i18n,
            index,
            thumbnail: gallery.thumbnail(index),
        })
        .map(Message::from);
        stack = stack.push(overlay);
    }

    stack.into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
