//! Unified error types for vinoteca.
//!
//! This module provides a single [`VinotecaError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Only two situations are errors at all: the chat transcript being absent,
//! and I/O faults (unreadable transcript, unreadable photo, failed output
//! write). A missing photo file for a parsed record and a rating line with
//! no digits are *not* errors — both degrade by silent exclusion, preferring
//! partial output over aborting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for vinoteca operations.
///
/// # Example
///
/// ```rust
/// use vinoteca::error::Result;
/// use vinoteca::WineRecord;
///
/// fn my_function() -> Result<Vec<WineRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, VinotecaError>;

/// The error type for all vinoteca operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VinotecaError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript exists but cannot be read (permissions, bad encoding)
    /// - A photo file exists but cannot be read
    /// - The output file cannot be written
    ///
    /// Photo files that simply do not exist are not errors; those records
    /// are excluded from the gallery instead.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export directory has no `_chat.txt` transcript.
    ///
    /// This is the one guarded startup check: without a transcript there is
    /// nothing to parse, so the process stops before producing any output.
    #[error("Chat transcript not found: {}", path.display())]
    MissingTranscript {
        /// The transcript path that was checked.
        path: PathBuf,
    },
}

impl VinotecaError {
    /// Creates a missing-transcript error.
    pub fn missing_transcript(path: impl Into<PathBuf>) -> Self {
        VinotecaError::MissingTranscript { path: path.into() }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, VinotecaError::Io(_))
    }

    /// Returns `true` if this is a missing-transcript error.
    pub fn is_missing_transcript(&self) -> bool {
        matches!(self, VinotecaError::MissingTranscript { .. })
    }
}
