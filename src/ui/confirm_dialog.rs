// SPDX-License-Identifier: MPL-2.0
//! Modal confirmation shown before an image is removed.
//!
//! The dialog is layered over the main content with a `Stack`; the backdrop
//! is `opaque` so nothing underneath reacts while it is open. Clicking the
//! backdrop counts as cancel.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Column, Container, Row, Stack, Text},
    Element, Length,
};

#[derive(Debug, Clone)]
pub enum Message {
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Confirmed,
    Dismissed,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Confirm => Event::Confirmed,
        Message::Cancel => Event::Dismissed,
    }
}

/// Dialog body asking whether `file_name` should be removed.
pub fn view<'a>(i18n: &I18n, file_name: &str) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("confirm-remove-title")).size(typography::TITLE_SM);
    let body = Text::new(i18n.tr_with_args(
        "confirm-remove-body",
        &[("file".to_string(), file_name.to_string())],
    ))
    .size(typography::BODY);

    let cancel = button(Text::new(i18n.tr("confirm-remove-cancel")))
        .on_press(Message::Cancel)
        .style(button::secondary);
    let confirm = button(Text::new(i18n.tr("confirm-remove-confirm")))
        .on_press(Message::Confirm)
        .style(styles::button::danger);

    let actions = Row::new().spacing(spacing::SM).push(cancel).push(confirm);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(body)
        .push(
            Container::new(actions)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

/// Layers `dialog` centered over `base`. Clicks on the scrim around the
/// dialog emit `on_backdrop`.
pub fn overlay<'a, M>(
    base: Element<'a, M>,
    dialog: Element<'a, M>,
    on_backdrop: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = Container::new(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::scrim);

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(backdrop).on_press(on_backdrop)))
        .into()
}
