// SPDX-License-Identifier: MPL-2.0
//! Update logic: turns messages into session transitions and background tasks.
//!
//! The export runs in three asynchronous steps chained through messages:
//! resize and zip (`ArchivePrepared`), save dialog (`SaveTargetChosen`) and
//! the file write (`ArchiveSaved`). The session stays locked from the first
//! step until one of them ends the export.

use super::Message;
use crate::app::config::STATUS_CLEAR_DELAY_MS;
use crate::media::{archive, format, intake, PreparedArchive};
use crate::session::{IntakeOutcome, Session};
use crate::ui::{confirm_dialog, gallery_table, navbar};
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

/// Mutable application state borrowed for one update.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    /// Archive built by the current export, waiting for its save location.
    pub pending_archive: &'a mut Option<PreparedArchive>,
    /// Quality factor for lossy encoders.
    pub quality: u8,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::Reset => {
            ctx.session.reset();
            Task::none()
        }
        navbar::Event::DimensionChanged(value) => {
            ctx.session.set_dimension_input(value);
            Task::none()
        }
        navbar::Event::Export => start_export(ctx),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_table::Message,
) -> Task<Message> {
    match gallery_table::update(message) {
        gallery_table::Event::Upload => {
            if ctx.session.is_exporting() {
                return Task::none();
            }
            open_upload_dialog()
        }
        gallery_table::Event::RequestRemoval(id) => {
            ctx.session.request_removal(id);
            Task::none()
        }
    }
}

pub fn handle_confirm_dialog_message(
    ctx: &mut UpdateContext<'_>,
    message: confirm_dialog::Message,
) -> Task<Message> {
    match confirm_dialog::update(message) {
        confirm_dialog::Event::Confirmed => {
            ctx.session.confirm_removal();
        }
        confirm_dialog::Event::Dismissed => ctx.session.dismiss_removal(),
    }
    Task::none()
}

// =============================================================================
// Upload
// =============================================================================

fn open_upload_dialog() -> Task<Message> {
    let extensions = format::supported_extensions();
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", extensions.as_slice())
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::FilesPicked,
    )
}

/// Reads and probes a batch of paths in the background.
pub fn load_batch(paths: Vec<PathBuf>) -> Task<Message> {
    if paths.is_empty() {
        return Task::none();
    }
    Task::perform(intake::load_paths(paths), Message::IntakeLoaded)
}

pub fn handle_files_picked(ctx: &mut UpdateContext<'_>, paths: Option<Vec<PathBuf>>) -> Task<Message> {
    match paths {
        Some(paths) if !ctx.session.is_exporting() => load_batch(paths),
        _ => Task::none(),
    }
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.session.is_exporting() || path.is_dir() {
        return Task::none();
    }
    load_batch(vec![path])
}

pub fn handle_intake_loaded(
    ctx: &mut UpdateContext<'_>,
    results: Vec<intake::ProbeResult>,
) -> Task<Message> {
    if let IntakeOutcome::Rejected(err) = ctx.session.apply_intake(results) {
        tracing::debug!(error = %err, "upload batch rejected");
    }
    Task::none()
}

// =============================================================================
// Export
// =============================================================================

fn start_export(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(job) = ctx.session.begin_export() else {
        return Task::none();
    };
    Task::perform(
        archive::prepare(job.jobs, job.target, ctx.quality),
        Message::ArchivePrepared,
    )
}

pub fn handle_archive_prepared(
    ctx: &mut UpdateContext<'_>,
    result: crate::error::Result<PreparedArchive>,
) -> Task<Message> {
    match result {
        Ok(prepared) => {
            ctx.session.archive_ready(&prepared);
            let file_name = prepared.file_name.clone();
            *ctx.pending_archive = Some(prepared);
            Task::perform(
                async move {
                    rfd::AsyncFileDialog::new()
                        .set_file_name(&file_name)
                        .add_filter("Zip", &["zip"])
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::SaveTargetChosen,
            )
        }
        Err(err) => {
            ctx.session.fail_export(&err);
            Task::none()
        }
    }
}

pub fn handle_save_target_chosen(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let prepared = ctx.pending_archive.take();
    match (path, prepared) {
        (Some(path), Some(prepared)) => Task::perform(
            archive::save_archive(path, prepared.bytes),
            Message::ArchiveSaved,
        ),
        _ => {
            ctx.session.cancel_export();
            Task::none()
        }
    }
}

pub fn handle_archive_saved(
    ctx: &mut UpdateContext<'_>,
    result: crate::error::Result<PathBuf>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "archive saved");
            let generation = ctx.session.complete_export();
            schedule_status_clear(generation)
        }
        Err(err) => {
            ctx.session.fail_export(&err);
            Task::none()
        }
    }
}

fn schedule_status_clear(generation: u64) -> Task<Message> {
    Task::perform(status_clear_after_delay(generation), Message::ClearStatus)
}

/// Resolves to `generation` once the status clear delay has elapsed.
async fn status_clear_after_delay(generation: u64) -> u64 {
    tokio::time::sleep(Duration::from_millis(STATUS_CLEAR_DELAY_MS)).await;
    generation
}

pub fn handle_clear_status(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    ctx.session.clear_status(generation);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::media::{Dimensions, ProbedFile, SelectedFile};
    use crate::session::StatusKind;
    use std::sync::Arc;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::default();
        session.apply_intake(
            names
                .iter()
                .map(|name| {
                    Ok(ProbedFile {
                        file: SelectedFile::new(*name, vec![0]),
                        dimensions: Dimensions::new(4, 4),
                    })
                })
                .collect(),
        );
        session
    }

    fn prepared() -> PreparedArchive {
        PreparedArchive {
            file_name: "ImageResizer_1_512x512.zip".into(),
            bytes: Arc::new(vec![1, 2, 3]),
            count: 1,
        }
    }

    #[test]
    fn dismissed_save_dialog_keeps_gallery() {
        let mut session = session_with(&["a.png"]);
        session.begin_export().expect("export starts");
        let mut pending = Some(prepared());
        let mut ctx = UpdateContext {
            session: &mut session,
            pending_archive: &mut pending,
            quality: 100,
        };

        let _task = handle_save_target_chosen(&mut ctx, None);
        assert!(pending.is_none());
        assert!(!session.is_exporting());
        assert_eq!(session.gallery().len(), 1);
    }

    #[test]
    fn failed_preparation_reports_error() {
        let mut session = session_with(&["a.png"]);
        session.begin_export().expect("export starts");
        let mut pending = None;
        let mut ctx = UpdateContext {
            session: &mut session,
            pending_archive: &mut pending,
            quality: 100,
        };

        let _task = handle_archive_prepared(&mut ctx, Err(Error::resize("a.png", "encoder")));
        let status = session.status().message().expect("status");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.key, "status-resize-failed");
        assert_eq!(session.gallery().len(), 1);
    }

    #[test]
    fn saved_archive_clears_gallery() {
        let mut session = session_with(&["a.png", "b.png"]);
        session.begin_export().expect("export starts");
        let mut pending = None;
        let mut ctx = UpdateContext {
            session: &mut session,
            pending_archive: &mut pending,
            quality: 100,
        };

        let _task = handle_archive_saved(&mut ctx, Ok(PathBuf::from("out.zip")));
        assert!(session.gallery().is_empty());
        let status = session.status().message().expect("status");
        assert_eq!(status.key, "status-export-success");
    }

    #[tokio::test(start_paused = true)]
    async fn status_clear_waits_two_seconds() {
        assert_eq!(STATUS_CLEAR_DELAY_MS, 2_000);
        let started = tokio::time::Instant::now();
        assert_eq!(status_clear_after_delay(7).await, 7);
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_millis(2_100));
    }

    #[test]
    fn confirm_dialog_removes_pending_entry() {
        let mut session = session_with(&["a.png", "b.png"]);
        let id = session.gallery().iter().next().map(|e| e.id).expect("entry");
        let mut pending = None;
        let mut ctx = UpdateContext {
            session: &mut session,
            pending_archive: &mut pending,
            quality: 100,
        };

        let _task = handle_gallery_message(&mut ctx, gallery_table::Message::RemovePressed(id));
        let _task = handle_confirm_dialog_message(&mut ctx, confirm_dialog::Message::Confirm);
        let names: Vec<_> = session.gallery().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(names, ["b.png"]);
    }
}
