// SPDX-License-Identifier: MPL-2.0
//! Reading selected files and probing their pixel dimensions.
//!
//! Every file of a batch is read and probed on its own blocking task; the
//! batch is joined once all of them finished. Deciding whether the batch is
//! accepted (duplicate names, decode failures) happens afterwards on the UI
//! thread, see [`crate::session::Session::apply_intake`].

use super::format;
use crate::error::{Error, Result};
use bytes::Bytes;
use futures_util::future::join_all;
use image_rs::ImageReader;
use std::collections::HashSet;
use std::fmt;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A file picked by the user: name, MIME type and raw bytes.
///
/// Bytes are reference counted, so the preview handle and the resize
/// workers share the encoded image instead of copying it.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl SelectedFile {
    /// Wraps in-memory bytes, deriving the MIME type from the name's extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = format::mime_for_name(&name).to_string();
        Self {
            name,
            mime,
            bytes: Bytes::from(bytes),
        }
    }

    /// Reads a file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] naming the file when it cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let name = display_name(path);
        let bytes = std::fs::read(path).map_err(|err| Error::decode(&name, err))?;
        Ok(Self::new(name, bytes))
    }

    /// Uppercased MIME subtype, e.g. `PNG`.
    #[must_use]
    pub fn type_label(&self) -> String {
        format::type_label(&self.mime)
    }
}

/// A selected file whose header decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedFile {
    pub file: SelectedFile,
    pub dimensions: Dimensions,
}

/// Outcome of probing one file; failures keep the file name for reporting.
pub type ProbeResult = Result<ProbedFile>;

/// File name shown to the user for `path`.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Determines the pixel dimensions by decoding the image header only.
///
/// When the file name carries no known image extension, the MIME type is
/// taken from the sniffed content so the entry can be re-encoded on export.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the format is unknown or has no encoder,
/// the header is broken, or the image is empty.
pub fn probe(mut file: SelectedFile) -> ProbeResult {
    let reader = ImageReader::new(Cursor::new(file.bytes.as_ref()))
        .with_guessed_format()
        .map_err(|err| Error::decode(&file.name, err))?;
    let sniffed = reader.format();
    let (width, height) = reader
        .into_dimensions()
        .map_err(|err| Error::decode(&file.name, err))?;

    if width == 0 || height == 0 {
        return Err(Error::decode(&file.name, "image has no pixels"));
    }

    if format::image_format_for_label(&file.type_label()).is_none() {
        match sniffed.filter(|format| format::label_for_format(*format).is_some()) {
            Some(format) => file.mime = format.to_mime_type().to_string(),
            None => return Err(Error::decode(&file.name, "unsupported image format")),
        }
    }

    Ok(ProbedFile {
        file,
        dimensions: Dimensions::new(width, height),
    })
}

/// Probes every file concurrently and returns the results in input order.
pub async fn probe_batch(files: Vec<SelectedFile>) -> Vec<ProbeResult> {
    let tasks = files.into_iter().map(|file| {
        let name = file.name.clone();
        async move {
            tokio::task::spawn_blocking(move || probe(file))
                .await
                .unwrap_or_else(|err| Err(Error::decode(name, format!("probe task failed: {err}"))))
        }
    });
    join_all(tasks).await
}

/// Reads and probes every path concurrently, in input order.
pub async fn load_paths(paths: Vec<PathBuf>) -> Vec<ProbeResult> {
    let tasks = paths.into_iter().map(|path| async move {
        let name = display_name(&path);
        tokio::task::spawn_blocking(move || SelectedFile::read(&path).and_then(probe))
            .await
            .unwrap_or_else(|err| Err(Error::decode(name, format!("probe task failed: {err}"))))
    });
    let results = join_all(tasks).await;
    tracing::debug!(
        files = results.len(),
        failed = results.iter().filter(|r| r.is_err()).count(),
        "probed upload batch"
    );
    results
}

/// Names that collide with an existing gallery entry or appear more than once
/// in `batch`. Each colliding name is listed once, in batch order.
pub fn collisions<'a, F>(batch: impl IntoIterator<Item = &'a str>, is_taken: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let names: Vec<&str> = batch.into_iter().collect();
    let mut seen = HashSet::new();
    let repeated: HashSet<&str> = names
        .iter()
        .copied()
        .filter(|name| !seen.insert(*name))
        .collect();

    let mut reported = HashSet::new();
    names
        .into_iter()
        .filter(|name| is_taken(name) || repeated.contains(name))
        .filter(|name| reported.insert(*name))
        .map(str::to_string)
        .collect()
}
