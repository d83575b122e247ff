//! Character cursor
//!
//! A forward-only position over the fully materialized source with exactly one
//! step of pushback. Handlers read what they need and hand back the first
//! character they do not own with [`Cursor::unread`].

/// Forward cursor over the source text.
#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    src: &'s str,
    pos: usize,
    /// Byte offset of the last character returned by `next`, if it can be unread.
    last: Option<usize>,
}

impl<'s> Cursor<'s> {
    pub fn new(src: &'s str) -> Self {
        Self {
            src,
            pos: 0,
            last: None,
        }
    }

    /// Read the next character, or `None` at end of stream.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        match self.src[self.pos..].chars().next() {
            Some(ch) => {
                self.last = Some(self.pos);
                self.pos += ch.len_utf8();
                Some(ch)
            }
            None => {
                self.last = None;
                None
            }
        }
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Consume the next character if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Push back the character returned by the last `next`.
    ///
    /// Only one character can be pushed back; a second call is a no-op.
    pub fn unread(&mut self) {
        if let Some(last) = self.last.take() {
            self.pos = last;
        }
    }

    /// Whether the character just read was the first one of the stream.
    pub fn at_stream_start(&self) -> bool {
        self.last == Some(0)
    }

    /// The unconsumed remainder of the source.
    pub fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }
}
