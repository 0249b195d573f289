// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget of the resizer window.
//!
//! - **Palette**: base and status colors
//! - **Opacity**: scrim and surface transparency
//! - **Spacing**: 8px grid
//! - **Sizing**: fixed widget sizes (thumbnails, dialog, table columns)
//! - **Typography**: font size scale
//! - **Radius**: corner radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Status line
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Backdrop behind the confirmation dialog.
    pub const SCRIM: f32 = 0.5;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the width & height field in the navbar.
    pub const DIMENSION_INPUT_WIDTH: f32 = 120.0;

    /// Edge of the square preview cell.
    pub const THUMBNAIL: f32 = 64.0;

    pub const DIALOG_WIDTH: f32 = 360.0;

    // Gallery columns (preview and name take the remaining space)
    pub const COLUMN_ID: f32 = 48.0;
    pub const COLUMN_RESOLUTION: f32 = 110.0;
    pub const COLUMN_TYPE: f32 = 90.0;
    pub const COLUMN_ACTION: f32 = 100.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App title in the navbar.
    pub const TITLE_MD: f32 = 20.0;

    /// Dialog title.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Table headers and the status line.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < opacity::OPAQUE);
    assert!(opacity::SURFACE > opacity::SCRIM && opacity::SURFACE < opacity::OPAQUE);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(sizing::DIALOG_WIDTH > sizing::THUMBNAIL);
};
