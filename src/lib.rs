//! # noteblog
//!
//! Converts note-taking Markdown (headers, emphasis, code, lists, pipe tables,
//! `![[image]]` embeds and `[^n]` footnotes) into the fixed HTML subset used by
//! a blog page.
//!
//! File Layout
//!
//! The converter is a single pass over the source characters. There is no token
//! stream and no document tree: handlers read from a shared cursor and write markup
//! straight into the output buffer.
//!
//! src/noteblog
//!   ├── cursor.rs      Character stream with one-step pushback
//!   ├── entities.rs    Reserved character -> HTML entity table
//!   ├── output.rs      Output buffer (the primitive emitter)
//!   ├── footnotes.rs   Original -> sequential footnote numbering
//!   ├── scanner.rs     Per-conversion context handed to every handler
//!   ├── handlers/      One module per construct
//!   ├── driver.rs      Dispatch loop and paragraph policy
//!   ├── error.rs       Errors from the file-level helpers
//!   └── loader.rs      File reading / writing around the core
//!
//! ```text
//! let html = noteblog::convert("# Title\n\nSome *text*.", "/img");
//! ```

pub mod noteblog;

pub use noteblog::driver::{convert, convert_with};
pub use noteblog::error::{Error, Result};
pub use noteblog::loader::{convert_file, read_source, write_output};
pub use noteblog::options::{ConvertOptions, OrphanFootnotes};
