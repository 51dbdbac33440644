// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every toast surface.
//!
//! - **Palette**: base and semantic colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (4px steps on an 8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Border**, **Radius**, **Shadow**
//!
//! ```
//! use iced_toasts::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Semantic colors, one per severity
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Toast card background.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of an inline toast.
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Blocking toast title.
    pub const TITLE_SM: f32 = 18.0;

    /// Glyphs and the dismiss button.
    pub const BODY_LG: f32 = 16.0;

    /// Toast body text.
    pub const BODY: f32 = 14.0;

    /// Hints and tooltips.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Toast accent border.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::MD > radius::SM);
};
