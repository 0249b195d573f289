// SPDX-License-Identifier: MPL-2.0
//! Image intake, resizing and archive export.
//!
//! Decoding, scaling and encoding are delegated to the `image` crate and the
//! archive format to the `zip` crate. This module only wires them into the
//! upload and export workflow:
//!
//! - [`intake`] reads the selected files and probes their dimensions
//! - [`resize`] fits every image into the [`ResizeTarget`]
//! - [`archive`] names the entries, builds the zip and saves it

pub mod archive;
pub mod format;
pub mod intake;
pub mod resize;

// Re-export commonly used types
pub use archive::PreparedArchive;
pub use intake::{Dimensions, ProbeResult, ProbedFile, SelectedFile};
pub use resize::{ResizeJob, ResizeTarget, ResizedArtifact};
