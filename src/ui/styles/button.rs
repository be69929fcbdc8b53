// SPDX-License-Identifier: MPL-2.0
//! Button styles for the retry action, the presentation controls and the grid cells.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Theme};

fn rounded(
    fill: Color,
    text_color: Color,
    outline: Color,
    outline_width: f32,
    lift: Shadow,
) -> Style {
    Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: outline,
            width: outline_width,
            radius: radius::SM.into(),
        },
        shadow: lift,
        ..Style::default()
    }
}

fn is_engaged(status: Status) -> bool {
    matches!(status, Status::Hovered | Status::Pressed)
}

/// Retry button on the failure screen.
pub fn primary(_theme: &Theme, status: Status) -> Style {
    let fill = match status {
        Status::Disabled => palette::GRAY_400,
        Status::Hovered => palette::PRIMARY_400,
        Status::Active | Status::Pressed => palette::PRIMARY_500,
    };
    rounded(fill, palette::WHITE, palette::PRIMARY_500, 1.0, shadow::SM)
}

/// Close, previous and next controls drawn over the presented image.
pub fn presentation_control(_theme: &Theme, status: Status) -> Style {
    let alpha = match status {
        Status::Pressed => opacity::OVERLAY_PRESSED,
        Status::Hovered => opacity::OVERLAY_HOVER,
        Status::Active | Status::Disabled => opacity::OVERLAY_MEDIUM,
    };
    let fill = Color {
        a: alpha,
        ..palette::BLACK
    };
    rounded(fill, palette::WHITE, Color::TRANSPARENT, 0.0, shadow::MD)
}

/// Grid cell: flat until the pointer is on it, then outlined in the accent color.
pub fn grid_cell(theme: &Theme, status: Status) -> Style {
    let surface = theme.extended_palette().background.weak;
    let outline = if is_engaged(status) {
        palette::PRIMARY_400
    } else {
        Color::TRANSPARENT
    };
    rounded(surface.color, surface.text, outline, 2.0, shadow::NONE)
}
