// SPDX-License-Identifier: MPL-2.0
//! `image_resizer` resizes a batch of images and saves them as one zip archive.
//!
//! Images are uploaded into an in-memory gallery, fitted into a common
//! width & height on export, re-encoded in their own format and packed into
//! `ImageResizer_<count>_<W>x<H>.zip`. The window is built with Iced,
//! strings are localized with Fluent.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod session;
pub mod ui;
