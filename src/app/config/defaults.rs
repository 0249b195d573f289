// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Resize Defaults
// ==========================================================================

/// Default width and height of the resize target, in pixels.
pub const DEFAULT_RESIZE_SIZE: u32 = 512;

/// Smallest accepted target dimension.
pub const MIN_RESIZE_SIZE: u32 = 1;

/// Largest accepted target dimension.
pub const MAX_RESIZE_SIZE: u32 = 16_384;

// ==========================================================================
// Encoding Defaults
// ==========================================================================

/// Default quality factor for lossy encoders (JPEG).
pub const DEFAULT_QUALITY: u8 = 100;

/// Minimum quality factor.
pub const MIN_QUALITY: u8 = 1;

/// Maximum quality factor.
pub const MAX_QUALITY: u8 = 100;

// ==========================================================================
// Status Line
// ==========================================================================

/// Delay before the status line is cleared after a successful export.
pub const STATUS_CLEAR_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Archive Naming
// ==========================================================================

/// Prefix of the exported archive filename.
pub const ARCHIVE_NAME_PREFIX: &str = "ImageResizer";

const _: () = {
    assert!(MIN_RESIZE_SIZE > 0);
    assert!(DEFAULT_RESIZE_SIZE >= MIN_RESIZE_SIZE && DEFAULT_RESIZE_SIZE <= MAX_RESIZE_SIZE);
    assert!(DEFAULT_QUALITY >= MIN_QUALITY && DEFAULT_QUALITY <= MAX_QUALITY);
};
