//! # Error Types
//!
//! Fatal conditions surfaced by the picker. Every variant ends the run with
//! exit status 1; the binary prints the `Display` form as a single line on
//! stderr.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickerError>;

#[derive(Error, Debug)]
pub enum PickerError {
    /// The manifest could not be opened, or reading it failed part way.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest parsed but produced no category with at least one entry.
    #[error("no packages found in {}", .path.display())]
    EmptyManifest { path: PathBuf },

    /// The terminal could not be driven interactively.
    #[error("interactive session failed: {0}")]
    Session(String),
}

impl PickerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn empty_manifest(path: impl Into<PathBuf>) -> Self {
        Self::EmptyManifest { path: path.into() }
    }

    /// Flatten an `anyhow` chain from the terminal layer into a session error.
    pub fn session(err: &anyhow::Error) -> Self {
        Self::Session(format!("{err:#}"))
    }
}
