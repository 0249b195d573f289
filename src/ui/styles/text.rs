// SPDX-License-Identifier: MPL-2.0
//! Text styles for the status line.

use crate::session::StatusKind;
use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Green for success, red for errors, theme text color otherwise.
pub fn status(kind: StatusKind) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let color = match kind {
            StatusKind::Success => palette::SUCCESS_500,
            StatusKind::Error => palette::ERROR_500,
            StatusKind::Pending => palette::INFO_500,
            StatusKind::Info => theme.extended_palette().background.base.text,
        };
        text::Style { color: Some(color) }
    }
}
