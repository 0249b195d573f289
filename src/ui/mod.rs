// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one renders from a borrowed `ViewContext`, emits its own `Message`, and
//! its `update` turns that message into an `Event` for the application.
//!
//! # Components
//!
//! - [`navbar`] - Title (reset), width & height field, export button
//! - [`gallery_table`] - Uploaded images and the upload button
//! - [`confirm_dialog`] - Modal confirmation before removing an image
//! - [`status_line`] - Colored status message
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod confirm_dialog;
pub mod design_tokens;
pub mod gallery_table;
pub mod navbar;
pub mod status_line;
pub mod styles;
pub mod theming;
