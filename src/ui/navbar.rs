// SPDX-License-Identifier: MPL-2.0
//! Navigation bar across the top of the window.
//!
//! Holds the app title (pressing it starts a new session), the coupled
//! width & height field and the export button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dimension_input: &'a str,
    /// Export has something to do and nothing is running.
    pub can_export: bool,
    /// An export is running; the title and the field are inactive.
    pub busy: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    TitlePressed,
    DimensionChanged(String),
    ExportPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Reset,
    DimensionChanged(String),
    Export,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::TitlePressed => Event::Reset,
        Message::DimensionChanged(value) => Event::DimensionChanged(value),
        Message::ExportPressed => Event::Export,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = button(Text::new(ctx.i18n.tr("navbar-title-button")).size(typography::TITLE_MD))
        .style(styles::button::title)
        .on_press_maybe((!ctx.busy).then_some(Message::TitlePressed));

    let label = Text::new(ctx.i18n.tr("navbar-dimension-label")).size(typography::BODY);

    let mut dimension = text_input(
        &ctx.i18n.tr("navbar-dimension-placeholder"),
        ctx.dimension_input,
    )
    .width(Length::Fixed(sizing::DIMENSION_INPUT_WIDTH))
    .padding(spacing::XS);
    if !ctx.busy {
        dimension = dimension.on_input(Message::DimensionChanged);
    }

    let export = button(Text::new(ctx.i18n.tr("navbar-export-button")))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD]);
    let export = if ctx.can_export {
        export
            .on_press(Message::ExportPressed)
            .style(styles::button::primary)
    } else {
        export.style(styles::button::disabled)
    };

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label)
        .push(dimension)
        .push(export);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(controls);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}
