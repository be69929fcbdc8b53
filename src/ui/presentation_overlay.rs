// SPDX-License-Identifier: MPL-2.0
//! Presentation overlay: one image at full window size with close and
//! wraparound navigation controls.
//!
//! The overlay is meant to be pushed as the top layer of a [`Stack`] above
//! the grid. It is wrapped in [`opaque`] so presses never reach the cells
//! underneath while it is shown.
//!
//! [`Stack`]: iced::widget::Stack

use crate::domain::gallery::{ImageIndex, IMAGE_COUNT};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery_grid::Thumbnail;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, opaque, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub index: ImageIndex,
    pub thumbnail: &'a Thumbnail,
}

/// Messages emitted by the overlay controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
}

/// Render the overlay.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.thumbnail {
        Thumbnail::Ready(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Thumbnail::Loading => status_text(ctx.i18n.tr("gallery-image-loading")),
        Thumbnail::Unavailable => status_text(ctx.i18n.tr("gallery-image-unavailable")),
    };

    let surface = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::presentation_backdrop);

    let stack = Stack::new()
        .push(surface)
        .push(build_navigation(&ctx))
        .push(build_top_bar(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    opaque(stack)
}

/// Position counter on the left, close button on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = ctx.i18n.tr_with_args(
        "presentation-position",
        &[
            ("current", FluentValue::from(ctx.index.value() + 1)),
            ("total", FluentValue::from(IMAGE_COUNT)),
        ],
    );
    let badge = Container::new(Text::new(position).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::position_badge);

    let close = button(Text::new(ctx.i18n.tr("presentation-close")).size(typography::BODY_LG))
        .padding(spacing::XS)
        .style(styles::button::presentation_control)
        .on_press(Message::Close);

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(badge)
            .push(Space::new().width(Length::Fill))
            .push(close),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_y(Vertical::Top)
    .into()
}

/// Previous and next zones along the left and right edges.
fn build_navigation<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let previous = nav_zone(
        format!("◀ {}", ctx.i18n.tr("presentation-previous")),
        Message::Previous,
        Horizontal::Left,
    );
    let next = nav_zone(
        format!("{} ▶", ctx.i18n.tr("presentation-next")),
        Message::Next,
        Horizontal::Right,
    );

    Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(previous)
        .push(next)
        .into()
}

fn nav_zone<'a>(label: String, message: Message, align: Horizontal) -> Element<'a, Message> {
    let arrow = button(Text::new(label).size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(styles::button::presentation_control)
        .on_press(message);

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}

fn status_text<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
