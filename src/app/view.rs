// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Navbar on top, gallery table in the middle, status line at the bottom.
//! While a removal waits for confirmation the dialog is layered over
//! everything else.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::confirm_dialog;
use crate::ui::design_tokens::spacing;
use crate::ui::gallery_table::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::status_line;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let busy = ctx.session.is_exporting();

    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        dimension_input: ctx.session.dimension_input(),
        can_export: ctx.session.can_export(),
        busy,
    })
    .map(Message::Navbar);

    let gallery = gallery_table::view(GalleryViewContext {
        i18n: ctx.i18n,
        gallery: ctx.session.gallery(),
        busy,
    })
    .map(Message::Gallery);

    let content = Column::new()
        .push(navbar)
        .push(
            Container::new(gallery)
                .padding(spacing::MD)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(status_line::view(ctx.i18n, ctx.session.status()));

    let base: Element<'_, Message> = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    match ctx.session.pending_removal() {
        Some(entry) => confirm_dialog::overlay(
            base,
            confirm_dialog::view(ctx.i18n, entry.name()).map(Message::ConfirmDialog),
            Message::ConfirmDialog(confirm_dialog::Message::Cancel),
        ),
        None => base,
    }
}
