//! Output buffer
//!
//! Append-only sink for generated markup. All character emission goes through
//! [`Output::push_escaped`] unless a handler explicitly needs verbatim text.

use crate::noteblog::entities;

#[derive(Debug, Default, Clone)]
pub struct Output {
    buf: String,
}

impl Output {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Write `ch`, replacing it with its entity when it is reserved.
    pub fn push_escaped(&mut self, ch: char) {
        match entities::lookup(ch) {
            Some(entity) => self.buf.push_str(entity),
            None => self.buf.push(ch),
        }
    }

    /// Write `ch` as-is.
    pub fn push(&mut self, ch: char) {
        self.buf.push(ch);
    }

    /// Write markup or already-escaped text as-is.
    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Write `ch` `count` times, as-is.
    pub fn push_repeated(&mut self, ch: char, count: usize) {
        self.buf.extend(std::iter::repeat(ch).take(count));
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
