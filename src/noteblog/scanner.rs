//! Conversion context shared by the driver and every handler.
//!
//! A `Scanner` is built fresh for each conversion, so footnote numbering and the
//! output buffer never leak from one document into the next. Paragraph state is
//! not part of it: handlers report what they emitted through
//! [`Construct`] and the driver updates its own state from that.

use crate::noteblog::cursor::Cursor;
use crate::noteblog::footnotes::FootnoteNumbers;
use crate::noteblog::options::ConvertOptions;
use crate::noteblog::output::Output;

/// What a handler emitted, as seen by the paragraph policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// Running text: literal characters, emphasis, code, footnotes.
    Inline,
    /// A block element that ends at a line boundary: header, list, table, image.
    Block,
}

/// Signature shared by all handlers. The trigger character has already been
/// consumed when a handler is called.
pub type Handler = fn(&mut Scanner<'_>) -> Construct;

pub struct Scanner<'s> {
    pub cursor: Cursor<'s>,
    pub out: Output,
    pub footnotes: FootnoteNumbers,
    pub options: &'s ConvertOptions,
}

impl<'s> Scanner<'s> {
    pub fn new(src: &'s str, options: &'s ConvertOptions) -> Self {
        Self {
            cursor: Cursor::new(src),
            out: Output::with_capacity(src.len() + src.len() / 4),
            footnotes: FootnoteNumbers::new(),
            options,
        }
    }

    /// Read the next character and write it, entity-substituted.
    ///
    /// Returns the character, or `None` at end of stream.
    pub fn copy_escaped(&mut self) -> Option<char> {
        let ch = self.cursor.next()?;
        self.out.push_escaped(ch);
        Some(ch)
    }

    pub fn into_output(self) -> String {
        self.out.into_string()
    }
}
