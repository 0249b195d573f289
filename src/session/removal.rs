// SPDX-License-Identifier: MPL-2.0
//! Confirmation gate in front of gallery removals.

use crate::gallery::ImageId;

/// `Idle -> ConfirmPending(id) -> Idle`. Only a confirmation leaving
/// `ConfirmPending` removes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalGate {
    #[default]
    Idle,
    ConfirmPending(ImageId),
}

impl RemovalGate {
    #[must_use]
    pub fn pending(self) -> Option<ImageId> {
        match self {
            RemovalGate::Idle => None,
            RemovalGate::ConfirmPending(id) => Some(id),
        }
    }

    /// Opens the gate for `id`, replacing any earlier pending request.
    pub fn request(&mut self, id: ImageId) {
        *self = RemovalGate::ConfirmPending(id);
    }

    /// Closes the gate, returning the id to remove if one was pending.
    pub fn confirm(&mut self) -> Option<ImageId> {
        std::mem::take(self).pending()
    }

    pub fn dismiss(&mut self) {
        *self = RemovalGate::Idle;
    }
}
