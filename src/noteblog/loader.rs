//! File-based wrappers around the converter
//!
//! The converter works on clean in-memory text. These helpers read a note from
//! disk (dropping carriage returns so that line breaks are single `\n`
//! characters), run the conversion, and write the result.

use crate::noteblog::driver::convert_with;
use crate::noteblog::error::{Error, Result};
use crate::noteblog::options::ConvertOptions;
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Remove every carriage return from `text`.
pub fn strip_carriage_returns(text: &str) -> String {
    text.replace('\r', "")
}

/// Read a source file and normalize its line breaks.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = text {
        warn!(path = %path.display(), "source is not valid UTF-8; invalid bytes replaced");
    }
    info!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(strip_carriage_returns(&text))
}

/// Create (or truncate) `path`, write `html` and return the bytes written.
pub fn write_output(path: impl AsRef<Path>, html: &str) -> Result<usize> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_error)?;
    file.write_all(html.as_bytes()).map_err(write_error)?;
    file.sync_all().map_err(write_error)?;

    info!(path = %path.display(), bytes = html.len(), "wrote output");
    Ok(html.len())
}

/// Read `input`, convert it and write the result to `output`.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<usize> {
    let source = read_source(input)?;
    let html = convert_with(&source, options);
    write_output(output, &html)
}
