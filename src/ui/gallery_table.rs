// SPDX-License-Identifier: MPL-2.0
//! Gallery table: one row per uploaded image plus the upload button.
//!
//! Columns are id, preview, name, resolution, type and a remove action.
//! The remove button only asks for confirmation; the actual removal happens
//! once the dialog is confirmed.

use crate::gallery::{Gallery, ImageEntry, ImageId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Image, Column, Container, Row, Scrollable, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    /// Upload and remove are inactive while an export runs.
    pub busy: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    RemovePressed(ImageId),
    UploadPressed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RequestRemoval(ImageId),
    Upload,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::RemovePressed(id) => Event::RequestRemoval(id),
        Message::UploadPressed => Event::Upload,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body: Element<'a, Message> = if ctx.gallery.is_empty() {
        Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    } else {
        let rows = ctx
            .gallery
            .iter()
            .enumerate()
            .fold(Column::new(), |column, (index, entry)| {
                column.push(build_row(ctx.i18n, entry, index % 2 == 1, ctx.busy))
            });
        Scrollable::new(rows).height(Length::Fill).into()
    };

    let upload = button(Text::new(ctx.i18n.tr("upload-button")))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD]);
    let upload = if ctx.busy {
        upload.style(styles::button::disabled)
    } else {
        upload
            .on_press(Message::UploadPressed)
            .style(styles::button::primary)
    };

    Column::new()
        .spacing(spacing::SM)
        .push(build_header(ctx.i18n))
        .push(Container::new(body).height(Length::Fill))
        .push(
            Container::new(upload)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .into()
}

fn build_header<'a>(i18n: &I18n) -> Element<'a, Message> {
    let cell = |key: &str| Text::new(i18n.tr(key)).size(typography::BODY_SM);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::SM])
        .push(cell("gallery-header-id").width(Length::Fixed(sizing::COLUMN_ID)))
        .push(cell("gallery-header-preview").width(Length::Fixed(sizing::THUMBNAIL)))
        .push(cell("gallery-header-name").width(Length::Fill))
        .push(cell("gallery-header-resolution").width(Length::Fixed(sizing::COLUMN_RESOLUTION)))
        .push(cell("gallery-header-type").width(Length::Fixed(sizing::COLUMN_TYPE)))
        .push(Text::new("").width(Length::Fixed(sizing::COLUMN_ACTION)));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::table_header)
        .into()
}

fn build_row<'a>(
    i18n: &I18n,
    entry: &'a ImageEntry,
    striped: bool,
    busy: bool,
) -> Element<'a, Message> {
    let preview = Image::new(entry.preview.clone())
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL));

    let remove = button(Text::new(i18n.tr("gallery-remove-button")).size(typography::BODY_SM))
        .style(styles::button::danger)
        .on_press_maybe((!busy).then_some(Message::RemovePressed(entry.id)));

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XXS, spacing::SM])
        .align_y(Vertical::Center)
        .push(Text::new(entry.id.to_string()).width(Length::Fixed(sizing::COLUMN_ID)))
        .push(preview)
        .push(Text::new(entry.name()).width(Length::Fill))
        .push(Text::new(entry.resolution_label()).width(Length::Fixed(sizing::COLUMN_RESOLUTION)))
        .push(Text::new(entry.type_label.as_str()).width(Length::Fixed(sizing::COLUMN_TYPE)))
        .push(Container::new(remove).width(Length::Fixed(sizing::COLUMN_ACTION)));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::table_row(striped))
        .into()
}
