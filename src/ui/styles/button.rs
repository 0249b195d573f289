// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

fn raised() -> Shadow {
    Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 4.0,
    }
}

/// Main action (upload, export, confirm).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => return disabled(theme, status),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: raised(),
        snap: true,
    }
}

/// Destructive action (remove).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(theme, status),
        _ => {
            let mut style = button::danger(theme, status);
            style.border.radius = radius::SM.into();
            style
        }
    }
}

/// Button without a press handler (export with an empty gallery, controls
/// locked during an export).
pub fn disabled(theme: &Theme, _status: button::Status) -> button::Style {
    let background = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Flat button used for the app title (reset).
pub fn title(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => theme.extended_palette().background.base.text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}
