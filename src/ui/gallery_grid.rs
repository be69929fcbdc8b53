// SPDX-License-Identifier: MPL-2.0
//! Image grid view.
//!
//! Renders a [`GridLayout`] as rows of pressable cells. Every cell is rebuilt
//! on each render and bound to the index it displays, so a press always
//! reports the image under the cursor for the current arrangement.

use crate::application::gallery::{GridCell, GridLayout};
use crate::domain::gallery::ImageIndex;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Id, Row, Text},
    ContentFit, Element, Length,
};

/// Download state of one grid image.
#[derive(Debug, Clone, Default)]
pub enum Thumbnail {
    #[default]
    Loading,
    Ready(Handle),
    Unavailable,
}

impl Thumbnail {
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        match self {
            Thumbnail::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layout: &'a GridLayout,
    /// Indexed by image position; missing entries render as loading.
    pub thumbnails: &'a [Thumbnail],
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CellPressed(ImageIndex),
}

/// Render the grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill);

    for cells in ctx.layout.iter_rows() {
        let row = cells.iter().fold(
            Row::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .height(Length::FillPortion(1)),
            |row, cell| row.push(build_cell(&ctx, cell)),
        );
        rows = rows.push(row);
    }

    Container::new(rows)
        .id(Id::new(ctx.layout.id()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_cell<'a>(ctx: &ViewContext<'a>, cell: &GridCell) -> Element<'a, Message> {
    let thumbnail = ctx
        .thumbnails
        .get(cell.index.value())
        .cloned()
        .unwrap_or_default();

    let content: Element<'a, Message> = match thumbnail {
        Thumbnail::Ready(handle) => Image::new(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Thumbnail::Loading => placeholder(ctx.i18n.tr("gallery-image-loading")),
        Thumbnail::Unavailable => placeholder(ctx.i18n.tr("gallery-image-unavailable")),
    };

    button(content)
        .on_press(Message::CellPressed(cell.index))
        .padding(0.0)
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .style(styles::button::grid_cell)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
