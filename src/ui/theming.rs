// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop setting as read at startup.
    #[default]
    System,
}

impl ThemeMode {
    /// Picks the Iced theme for this mode.
    ///
    /// `System` queries the desktop, so call this once and keep the result.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => desktop_theme(),
        }
    }
}

// Dark unless the desktop positively reports light.
fn desktop_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Theme::Light,
        _ => Theme::Dark,
    }
}
