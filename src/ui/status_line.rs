// SPDX-License-Identifier: MPL-2.0
//! Single-line status message under the gallery.

use crate::i18n::fluent::I18n;
use crate::session::{StatusLine, StatusMessage};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Container, Text},
    Element, Length,
};

/// Translated text of a status message.
#[must_use]
pub fn render_text(i18n: &I18n, message: &StatusMessage) -> String {
    if message.args.is_empty() {
        i18n.tr(&message.key)
    } else {
        i18n.tr_with_args(&message.key, &message.args)
    }
}

pub fn view<'a, M: 'a>(i18n: &I18n, status: &StatusLine) -> Element<'a, M> {
    // An empty line keeps its height so the layout does not jump.
    let text = match status.message() {
        Some(message) => Text::new(render_text(i18n, message)).style(styles::text::status(message.kind)),
        None => Text::new(" "),
    };

    Container::new(text.size(typography::BODY_SM))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .into()
}
