//! Error types for the directory walk.
//!
//! Every variant carries the path that was being touched so the message
//! printed by the CLI points at the offending entry.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while planning or applying renames.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The directory to rename in does not exist.
    #[error("Directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    /// Listing the directory or renaming an entry was denied.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The kebab-case target name is already taken by another file.
    #[error("Cannot rename '{from}' to '{to}': target already exists")]
    Collision { from: String, to: String },

    /// Renaming a single entry failed, e.g. because it vanished after planning.
    #[error("Failed to rename '{from}' to '{to}': {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// Classify an I/O error raised while touching `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => RenameError::NotFound { path },
            io::ErrorKind::PermissionDenied => RenameError::PermissionDenied { path, source },
            _ => RenameError::Io { path, source },
        }
    }

    /// Classify an I/O error raised while inspecting one entry of the directory.
    ///
    /// Never yields `NotFound`, which is reserved for the directory itself.
    pub fn from_entry_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => RenameError::PermissionDenied { path, source },
            _ => RenameError::Io { path, source },
        }
    }

    /// Classify a failed `fs::rename` of `from` (at `path`) to `to`
    pub fn from_rename(path: &Path, from: &str, to: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => RenameError::PermissionDenied {
                path: path.to_path_buf(),
                source,
            },
            _ => RenameError::RenameFailed {
                from: from.to_string(),
                to: to.to_string(),
                source,
            },
        }
    }
}
