// SPDX-License-Identifier: MPL-2.0
//! Workflow state of one resizing session.
//!
//! [`Session`] owns the gallery, the id allocator, the resize target, the
//! status line and the removal gate. Every user-visible transition of the
//! upload, removal and export flow is a method here, so the whole workflow
//! can be driven without a window. The iced layer only turns messages into
//! these calls and spawns the background tasks they ask for.

mod removal;
mod status;

pub use removal::RemovalGate;
pub use status::{StatusKind, StatusLine, StatusMessage};

use crate::error::Error;
use crate::gallery::{Gallery, IdAllocator, ImageEntry, ImageId};
use crate::media::intake::{self, ProbeResult};
use crate::media::{PreparedArchive, ResizeJob, ResizeTarget};

/// What happened to an upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Empty batch, or an export is running.
    Ignored,
    /// Every file was appended.
    Accepted(usize),
    /// Nothing was appended.
    Rejected(Error),
}

/// Snapshot of the gallery handed to the export task.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub jobs: Vec<ResizeJob>,
    pub target: ResizeTarget,
}

impl ExportJob {
    #[must_use]
    pub fn count(&self) -> usize {
        self.jobs.len()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    gallery: Gallery,
    ids: IdAllocator,
    default_target: ResizeTarget,
    target: ResizeTarget,
    dimension_input: String,
    status: StatusLine,
    removal: RemovalGate,
    exporting: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ResizeTarget::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(default_target: ResizeTarget) -> Self {
        Self {
            gallery: Gallery::new(),
            ids: IdAllocator::default(),
            default_target,
            target: default_target,
            dimension_input: default_target.width().to_string(),
            status: StatusLine::default(),
            removal: RemovalGate::Idle,
            exporting: false,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    #[must_use]
    pub fn target(&self) -> ResizeTarget {
        self.target
    }

    /// Raw text of the width & height field.
    #[must_use]
    pub fn dimension_input(&self) -> &str {
        &self.dimension_input
    }

    /// Entry waiting for removal confirmation, if any.
    #[must_use]
    pub fn pending_removal(&self) -> Option<&ImageEntry> {
        self.removal.pending().and_then(|id| self.gallery.get(id))
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Export is possible with a non-empty gallery and no export running.
    #[must_use]
    pub fn can_export(&self) -> bool {
        !self.exporting && !self.gallery.is_empty()
    }

    /// Updates the field text; a valid value sets both width and height.
    pub fn set_dimension_input(&mut self, input: String) {
        if let Some(target) = ResizeTarget::parse_uniform(&input) {
            self.target = target;
        }
        self.dimension_input = input;
    }

    // =========================================================================
    // Upload
    // =========================================================================

    /// Accepts or rejects a probed upload batch as a whole.
    ///
    /// Name collisions (with the gallery or inside the batch) are checked
    /// first, then read/decode failures. Only a fully clean batch is
    /// appended, each file with a freshly allocated id.
    pub fn apply_intake(&mut self, results: Vec<ProbeResult>) -> IntakeOutcome {
        if results.is_empty() {
            return IntakeOutcome::Ignored;
        }
        if self.exporting {
            tracing::info!(files = results.len(), "upload skipped: export running");
            self.status.info("status-upload-busy");
            return IntakeOutcome::Ignored;
        }

        let names: Vec<&str> = results.iter().map(result_name).collect();
        let colliding = intake::collisions(names, |name| self.gallery.contains_name(name));
        if !colliding.is_empty() {
            tracing::info!(files = ?colliding, "upload rejected: duplicate names");
            return self.reject(Error::DuplicateName { names: colliding });
        }

        let (probed, failures): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
        if !failures.is_empty() {
            let failures: Vec<Error> = failures.into_iter().filter_map(Result::err).collect();
            for failure in &failures {
                tracing::warn!(error = %failure, "upload rejected");
            }
            return self.reject(merge_decode_failures(failures));
        }

        let entries: Vec<ImageEntry> = probed
            .into_iter()
            .flatten()
            .map(|file| ImageEntry::new(self.ids.allocate(), file))
            .collect();
        let count = entries.len();
        self.gallery.append(entries);
        self.status.success("status-upload-success");
        tracing::info!(count, total = self.gallery.len(), "upload accepted");
        IntakeOutcome::Accepted(count)
    }

    fn reject(&mut self, error: Error) -> IntakeOutcome {
        self.status.error(&error);
        IntakeOutcome::Rejected(error)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Asks for confirmation before removing `id`. Unknown ids are ignored,
    /// as is any request while an export runs.
    pub fn request_removal(&mut self, id: ImageId) -> bool {
        if self.exporting || self.gallery.get(id).is_none() {
            return false;
        }
        self.removal.request(id);
        true
    }

    /// Removes the entry awaiting confirmation.
    pub fn confirm_removal(&mut self) -> Option<ImageEntry> {
        let id = self.removal.confirm()?;
        let removed = self.gallery.remove(id);
        if let Some(entry) = &removed {
            tracing::debug!(id = %entry.id, file = entry.name(), "image removed");
        }
        removed
    }

    pub fn dismiss_removal(&mut self) {
        self.removal.dismiss();
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Starts an export: snapshots the gallery and marks the session busy.
    /// Returns `None` when the gallery is empty or an export already runs.
    pub fn begin_export(&mut self) -> Option<ExportJob> {
        if !self.can_export() {
            return None;
        }
        self.exporting = true;
        self.removal.dismiss();

        let job = ExportJob {
            jobs: self.gallery.iter().map(ImageEntry::resize_job).collect(),
            target: self.target,
        };
        self.status.set(
            StatusKind::Pending,
            "status-export-resizing",
            vec![
                ("count".into(), job.count().to_string()),
                ("size".into(), job.target.to_string()),
            ],
        );
        tracing::info!(count = job.count(), target = %job.target, "export started");
        Some(job)
    }

    /// The archive is built and waits for a save location.
    pub fn archive_ready(&mut self, archive: &PreparedArchive) {
        tracing::debug!(archive = %archive.file_name, "asking for save location");
        self.status
            .set(StatusKind::Pending, "status-export-sending", Vec::new());
    }

    /// Ends the export with an error; the gallery is kept.
    pub fn fail_export(&mut self, error: &Error) {
        tracing::warn!(error = %error, "export failed");
        self.exporting = false;
        self.status.error(error);
    }

    /// The save dialog was dismissed; the gallery is kept.
    pub fn cancel_export(&mut self) {
        tracing::info!("export canceled");
        self.exporting = false;
        self.status.info("status-export-canceled");
    }

    /// The archive was saved: the gallery is cleared. Returns the status
    /// generation the delayed clear may wipe.
    pub fn complete_export(&mut self) -> u64 {
        self.exporting = false;
        self.gallery.clear();
        self.removal.dismiss();
        tracing::info!("export finished");
        self.status.success("status-export-success")
    }

    /// Clears the status line unless a newer message replaced it.
    pub fn clear_status(&mut self, generation: u64) -> bool {
        self.status.clear_if(generation)
    }

    /// Starts over with an empty gallery, a fresh id counter and the default
    /// target. Ignored while an export runs.
    pub fn reset(&mut self) {
        if self.exporting {
            return;
        }
        *self = Self::new(self.default_target);
    }
}

fn result_name(result: &ProbeResult) -> &str {
    match result {
        Ok(probed) => probed.file.name.as_str(),
        Err(Error::Decode { name, .. } | Error::Resize { name, .. }) => name.as_str(),
        Err(_) => "",
    }
}

/// Folds several read failures into one error naming every file.
fn merge_decode_failures(mut failures: Vec<Error>) -> Error {
    if failures.len() == 1 {
        return failures.remove(0);
    }
    let mut names = Vec::new();
    let mut first_reason = None;
    for failure in &failures {
        if let Error::Decode { name, reason } = failure {
            names.push(name.as_str());
            first_reason.get_or_insert(reason.clone());
        }
    }
    match first_reason {
        Some(reason) => Error::decode(names.join(", "), reason),
        None => failures.remove(0),
    }
}
