// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and the colors derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors shared by the toast surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    /// Dimming layer behind a blocking notification.
    pub backdrop: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            backdrop: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            backdrop: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Picks the scheme matching an `iced` theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors fall back to dark
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Cycles light, dark, system.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// Returns the i18n key naming this mode.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}
