//! Error types for file-level operations.
//!
//! Conversion itself cannot fail; only reading the source and writing the
//! result can.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read.
    #[error("unable to read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    /// The output file could not be created or written.
    #[error("unable to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

/// Result type alias for noteblog file operations.
pub type Result<T> = std::result::Result<T, Error>;
