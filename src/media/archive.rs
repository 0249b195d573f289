// SPDX-License-Identifier: MPL-2.0
//! Packing resized images into a zip archive and saving it.

use super::format;
use super::resize::{self, ResizeJob, ResizeTarget, ResizedArtifact};
use crate::app::config::ARCHIVE_NAME_PREFIX;
use crate::error::{Error, Result};
use std::fmt;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use std::sync::Arc;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Name of the archive entry for `source_name`: `<base>_<W>x<H>.<ext>`.
///
/// The extension is whatever follows the last `.`; a name without one gets
/// the canonical extension of its format.
#[must_use]
pub fn artifact_entry_name(source_name: &str, type_label: &str, target: ResizeTarget) -> String {
    match source_name.rsplit_once('.') {
        Some((base, ext)) => format!("{base}_{target}.{ext}"),
        None => format!(
            "{source_name}_{target}.{}",
            format::extension_for_label(type_label)
        ),
    }
}

/// Archive file name: `ImageResizer_<N>_<W>x<H>.zip`.
#[must_use]
pub fn archive_file_name(count: usize, target: ResizeTarget) -> String {
    format!("{ARCHIVE_NAME_PREFIX}_{count}_{target}.zip")
}

/// Writes every artifact into an in-memory zip, in order.
///
/// # Errors
///
/// Returns [`Error::Archive`] if the zip writer fails.
pub fn build_archive(artifacts: &[ResizedArtifact], target: ResizeTarget) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for artifact in artifacts {
        let entry = artifact_entry_name(&artifact.source_name, &artifact.type_label, target);
        writer.start_file(entry, options)?;
        writer
            .write_all(&artifact.bytes)
            .map_err(|err| Error::Archive(err.to_string()))?;
    }

    Ok(writer.finish()?.into_inner())
}

/// A finished archive waiting for the user to pick a save location.
#[derive(Clone, PartialEq, Eq)]
pub struct PreparedArchive {
    pub file_name: String,
    pub bytes: Arc<Vec<u8>>,
    pub count: usize,
}

impl fmt::Debug for PreparedArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedArchive")
            .field("file_name", &self.file_name)
            .field("count", &self.count)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Resizes every job and packs the results.
///
/// # Errors
///
/// The first resize failure in job order, or [`Error::Archive`].
pub async fn prepare(
    jobs: Vec<ResizeJob>,
    target: ResizeTarget,
    quality: u8,
) -> Result<PreparedArchive> {
    let count = jobs.len();
    let artifacts = resize::resize_batch(jobs, target, quality).await?;

    let bytes = tokio::task::spawn_blocking(move || build_archive(&artifacts, target))
        .await
        .map_err(|err| Error::Archive(format!("archive task failed: {err}")))??;

    let file_name = archive_file_name(count, target);
    tracing::info!(archive = %file_name, size = bytes.len(), "archive ready");
    Ok(PreparedArchive {
        file_name,
        bytes: Arc::new(bytes),
        count,
    })
}

/// Writes the archive to `path`.
///
/// # Errors
///
/// Returns [`Error::Save`] when the file cannot be written.
pub async fn save_archive(path: PathBuf, bytes: Arc<Vec<u8>>) -> Result<PathBuf> {
    tokio::fs::write(&path, bytes.as_slice())
        .await
        .map_err(|err| Error::Save(format!("{}: {err}", path.display())))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::intake::{Dimensions, SelectedFile};
    use image_rs::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Read;
    use tempfile::tempdir;

    fn artifact(name: &str, label: &str, bytes: &[u8]) -> ResizedArtifact {
        ResizedArtifact {
            source_name: name.to_string(),
            type_label: label.to_string(),
            dimensions: Dimensions::new(1, 1),
            bytes: bytes.to_vec(),
        }
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 255])));
        let mut cursor = Cursor::new(Vec::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("encode png");
        cursor.into_inner()
    }

    #[test]
    fn entry_name_splits_on_last_dot() {
        let target = ResizeTarget::uniform(512);
        assert_eq!(
            artifact_entry_name("photo.jpg", "JPEG", target),
            "photo_512x512.jpg"
        );
        assert_eq!(
            artifact_entry_name("holiday.final.png", "PNG", target),
            "holiday.final_512x512.png"
        );
    }

    #[test]
    fn entry_name_without_extension_uses_format() {
        let target = ResizeTarget::uniform(64);
        assert_eq!(artifact_entry_name("scan", "PNG", target), "scan_64x64.png");
    }

    #[test]
    fn archive_name_counts_images() {
        assert_eq!(
            archive_file_name(2, ResizeTarget::uniform(300)),
            "ImageResizer_2_300x300.zip"
        );
    }

    #[test]
    fn build_archive_writes_one_entry_per_artifact() {
        let artifacts = [
            artifact("cat.png", "PNG", b"cat"),
            artifact("dog.jpg", "JPEG", b"dog"),
        ];
        let bytes = build_archive(&artifacts, ResizeTarget::uniform(300)).expect("zip");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("read zip");
        assert_eq!(archive.len(), 2);
        let mut names = Vec::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).expect("entry");
            names.push(entry.name().to_string());
            let mut content = Vec::new();
            entry.read_to_end(&mut content).expect("read entry");
            assert_eq!(content, artifacts[index].bytes);
        }
        assert_eq!(names, ["cat_300x300.png", "dog_300x300.jpg"]);
    }

    #[tokio::test]
    async fn prepare_resizes_and_names_archive() {
        let jobs = vec![
            ResizeJob {
                file: SelectedFile::new("a.png", png(50, 20)),
                type_label: "PNG".into(),
            },
            ResizeJob {
                file: SelectedFile::new("b.png", png(10, 10)),
                type_label: "PNG".into(),
            },
        ];
        let prepared = prepare(jobs, ResizeTarget::uniform(25), 100)
            .await
            .expect("prepare");
        assert_eq!(prepared.file_name, "ImageResizer_2_25x25.zip");
        assert_eq!(prepared.count, 2);

        let mut archive =
            zip::ZipArchive::new(Cursor::new(prepared.bytes.as_slice())).expect("read zip");
        let mut entry = archive.by_name("a_25x25.png").expect("entry");
        let mut content = Vec::new();
        entry.read_to_end(&mut content).expect("read entry");
        let decoded = image_rs::load_from_memory(&content).expect("decode");
        assert_eq!((decoded.width(), decoded.height()), (25, 10));
    }

    #[tokio::test]
    async fn save_archive_writes_bytes() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("out.zip");
        let saved = save_archive(path.clone(), Arc::new(b"PK".to_vec()))
            .await
            .expect("save");
        assert_eq!(saved, path);
        assert_eq!(std::fs::read(&path).expect("read back"), b"PK");
    }

    #[tokio::test]
    async fn save_archive_into_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("missing").join("out.zip");
        let err = save_archive(path, Arc::new(Vec::new())).await.unwrap_err();
        assert!(matches!(err, Error::Save(_)));
    }
}
