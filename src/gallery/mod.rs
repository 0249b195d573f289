// SPDX-License-Identifier: MPL-2.0
//! In-memory collection of the images waiting to be exported.
//!
//! Entries are kept in ascending id order, which is also upload order since
//! ids only ever increase. File names are unique within the gallery; the
//! upload flow checks that before appending.

mod entry;

pub use entry::{IdAllocator, ImageEntry, ImageId};

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    entries: Vec<ImageEntry>,
}

impl Gallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a batch and restores ascending id order.
    pub fn append(&mut self, entries: impl IntoIterator<Item = ImageEntry>) {
        self.entries.extend(entries);
        self.entries.sort_by_key(|entry| entry.id);
    }

    /// Removes the entry with `id`, returning it if it existed.
    pub fn remove(&mut self, id: ImageId) -> Option<ImageEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name() == name)
    }

    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
