// SPDX-License-Identifier: MPL-2.0
//! The single status line under the gallery.
//!
//! The line stores an i18n key plus arguments rather than rendered text, so
//! it is translated at view time. Every change bumps a generation counter; a
//! delayed clear only fires when the generation it captured is still current.

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    Success,
    Error,
    #[default]
    Info,
    /// Work is running in the background.
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub key: String,
    pub args: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    message: Option<StatusMessage>,
    generation: u64,
}

impl StatusLine {
    /// Replaces the current message and returns its generation.
    pub fn set(
        &mut self,
        kind: StatusKind,
        key: impl Into<String>,
        args: Vec<(String, String)>,
    ) -> u64 {
        self.generation += 1;
        self.message = Some(StatusMessage {
            kind,
            key: key.into(),
            args,
        });
        self.generation
    }

    pub fn success(&mut self, key: &str) -> u64 {
        self.set(StatusKind::Success, key, Vec::new())
    }

    pub fn info(&mut self, key: &str) -> u64 {
        self.set(StatusKind::Info, key, Vec::new())
    }

    pub fn error(&mut self, error: &Error) -> u64 {
        self.set(StatusKind::Error, error.i18n_key(), error.i18n_args())
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.message = None;
    }

    /// Clears the line if nothing replaced the message of `generation`.
    /// Returns whether it was cleared.
    pub fn clear_if(&mut self, generation: u64) -> bool {
        if self.generation == generation && self.message.is_some() {
            self.clear();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bumps_generation() {
        let mut status = StatusLine::default();
        let first = status.success("status-upload-success");
        let second = status.info("status-export-canceled");
        assert!(second > first);
        assert_eq!(status.message().map(|m| m.kind), Some(StatusKind::Info));
    }

    #[test]
    fn stale_clear_is_ignored() {
        let mut status = StatusLine::default();
        let stale = status.success("status-export-success");
        status.error(&Error::Save("disk full".into()));

        assert!(!status.clear_if(stale));
        let message = status.message().expect("error kept");
        assert_eq!(message.key, "status-save-failed");
        assert_eq!(
            message.args,
            vec![("reason".to_string(), "disk full".to_string())]
        );
    }

    #[test]
    fn current_clear_empties_line() {
        let mut status = StatusLine::default();
        let generation = status.success("status-export-success");
        assert!(status.clear_if(generation));
        assert!(status.message().is_none());
    }
}
