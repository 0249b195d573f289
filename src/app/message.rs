// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{PreparedArchive, ProbeResult};
use crate::ui::{confirm_dialog, gallery_table, navbar};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_table::Message),
    ConfirmDialog(confirm_dialog::Message),
    /// Result from the upload dialog; `None` when it was dismissed.
    FilesPicked(Option<Vec<PathBuf>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Every file of an upload batch was read and probed.
    IntakeLoaded(Vec<ProbeResult>),
    /// All images were resized and zipped.
    ArchivePrepared(Result<PreparedArchive, Error>),
    /// Result from the save dialog; `None` when it was dismissed.
    SaveTargetChosen(Option<PathBuf>),
    ArchiveSaved(Result<PathBuf, Error>),
    /// Delayed clear of the status line set at the given generation.
    ClearStatus(u64),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `IMAGE_RESIZER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Images uploaded as a first batch on startup.
    pub files: Vec<PathBuf>,
}
