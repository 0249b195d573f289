// SPDX-License-Identifier: MPL-2.0
//! Error kinds surfaced by the intake, resize and export workflow.
//!
//! Every variant maps to its own i18n key so the status line can tell a
//! duplicate upload apart from a broken image or a failed save.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// One or more selected files share a name with an image already in the
    /// gallery (or with another file of the same batch).
    #[error("Already added: {}", .names.join(", "))]
    DuplicateName { names: Vec<String> },

    /// The file could not be read or its image data could not be decoded.
    #[error("Cannot decode {name}: {reason}")]
    Decode { name: String, reason: String },

    /// Resizing or re-encoding an image failed.
    #[error("Cannot resize {name}: {reason}")]
    Resize { name: String, reason: String },

    /// Building the zip archive failed.
    #[error("Archive Error: {0}")]
    Archive(String),

    /// Writing the archive to the chosen location failed.
    #[error("Save Error: {0}")]
    Save(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    pub fn decode(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::Decode {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn resize(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::Resize {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::DuplicateName { .. } => "status-upload-duplicate",
            Error::Decode { .. } => "status-decode-failed",
            Error::Resize { .. } => "status-resize-failed",
            Error::Archive(_) => "status-archive-failed",
            Error::Save(_) => "status-save-failed",
            Error::Io(_) => "status-io-failed",
            Error::Config(_) => "notification-config-load-error",
        }
    }

    /// Returns the arguments interpolated into the i18n message.
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(String, String)> {
        match self {
            Error::DuplicateName { names } => vec![("files".into(), names.join(", "))],
            Error::Decode { name, reason } | Error::Resize { name, reason } => vec![
                ("file".into(), name.clone()),
                ("reason".into(), reason.clone()),
            ],
            Error::Archive(reason) | Error::Save(reason) | Error::Io(reason) | Error::Config(reason) => {
                vec![("reason".into(), reason.clone())]
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Archive(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
