// SPDX-License-Identifier: MPL-2.0
//! Gallery entry and identifier types.

use crate::media::{Dimensions, ProbedFile, ResizeJob, SelectedFile};
use iced::widget::image;
use std::fmt;

// =============================================================================
// ImageId
// =============================================================================

/// Session-unique identifier of an accepted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// IdAllocator
// =============================================================================

/// Hands out increasing ids starting at 1. Removing an image never gives
/// its id back.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    pub fn allocate(&mut self) -> ImageId {
        let id = ImageId(self.next);
        self.next += 1;
        id
    }
}

// =============================================================================
// ImageEntry
// =============================================================================

/// One accepted upload.
#[derive(Debug, Clone)]
pub struct ImageEntry {
    pub id: ImageId,
    pub file: SelectedFile,
    pub type_label: String,
    pub dimensions: Dimensions,
    pub preview: image::Handle,
}

impl ImageEntry {
    /// Builds an entry from a probed file, creating its thumbnail handle.
    #[must_use]
    pub fn new(id: ImageId, probed: ProbedFile) -> Self {
        let type_label = probed.file.type_label();
        let preview = image::Handle::from_bytes(probed.file.bytes.clone());
        Self {
            id,
            file: probed.file,
            type_label,
            dimensions: probed.dimensions,
            preview,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.file.name
    }

    /// `WxH`, as shown in the resolution column.
    #[must_use]
    pub fn resolution_label(&self) -> String {
        self.dimensions.to_string()
    }

    /// Snapshot handed to the resize workers.
    #[must_use]
    pub fn resize_job(&self) -> ResizeJob {
        ResizeJob {
            file: self.file.clone(),
            type_label: self.type_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_starts_at_one_and_increments() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.allocate().value(), 1);
        assert_eq!(ids.allocate().value(), 2);
        assert_eq!(ids.allocate().value(), 3);
    }

    #[test]
    fn entry_exposes_labels() {
        let probed = ProbedFile {
            file: SelectedFile::new("cat.png", vec![1, 2, 3]),
            dimensions: Dimensions::new(640, 480),
        };
        let entry = ImageEntry::new(IdAllocator::default().allocate(), probed);
        assert_eq!(entry.name(), "cat.png");
        assert_eq!(entry.type_label, "PNG");
        assert_eq!(entry.resolution_label(), "640x480");
        assert_eq!(entry.resize_job().type_label, "PNG");
    }

    #[test]
    fn entry_shares_file_bytes() {
        let file = SelectedFile::new("cat.png", vec![7; 64]);
        let source = file.bytes.clone();
        let entry = ImageEntry::new(
            IdAllocator::default().allocate(),
            ProbedFile {
                file,
                dimensions: Dimensions::new(8, 8),
            },
        );
        assert_eq!(entry.file.bytes.as_ptr(), source.as_ptr());
        assert_eq!(entry.resize_job().file.bytes.as_ptr(), source.as_ptr());
    }
}
