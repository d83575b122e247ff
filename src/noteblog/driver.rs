//! Document driver
//!
//! Reads the source one character at a time and routes each one: reserved
//! characters to the entity table, trigger characters to their handler, line
//! breaks to the paragraph policy, everything else straight to the output.
//!
//! Paragraph policy
//!
//!     A blank line opens a paragraph around the content that follows it and the
//!     next line break closes it again. A single line break inside running text is
//!     copied through unchanged. A blank line in front of a footnote definition
//!     (`[`) does not open a paragraph, since definitions render their own.
//!     Whatever paragraph is still open at end of stream is closed.

use crate::noteblog::handlers::{code, emphasis, footnote, header, image, list, table};
use crate::noteblog::options::ConvertOptions;
use crate::noteblog::scanner::{Construct, Handler, Scanner};
use tracing::debug;

/// Handlers that only trigger at the start of a line (or of the stream).
static LINE_START_HANDLERS: [(char, Handler); 2] = [('#', header::render), ('-', list::render)];

/// Handlers that trigger anywhere outside other constructs.
static HANDLERS: [(char, Handler); 5] = [
    ('*', emphasis::render),
    ('`', code::render),
    ('[', footnote::render),
    ('|', table::render),
    ('!', image::render),
];

/// Line and paragraph flags carried across handler calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphState {
    /// A `<p>` has been written and not closed yet.
    pub open: bool,
    /// The last character consumed was a line break.
    pub after_line_break: bool,
    /// A block construct was written since the last paragraph was opened.
    pub after_block: bool,
}

impl ParagraphState {
    /// State after a handler has written `construct`.
    pub fn after(self, construct: Construct) -> Self {
        match construct {
            Construct::Inline => Self {
                after_line_break: false,
                ..self
            },
            Construct::Block => Self {
                after_line_break: true,
                after_block: true,
                ..self
            },
        }
    }

    /// State after a character copied as plain text.
    pub fn after_text(self) -> Self {
        self.after(Construct::Inline)
    }
}

/// Convert `source` with default options and the given image directory.
pub fn convert(source: &str, image_directory: &str) -> String {
    convert_with(source, &ConvertOptions::with_image_directory(image_directory))
}

/// Convert `source` to blog HTML.
///
/// Never fails: malformed constructs degrade to literal text and every tag that
/// is opened is also closed.
pub fn convert_with(source: &str, options: &ConvertOptions) -> String {
    debug!(bytes = source.len(), "converting document");

    let mut scanner = Scanner::new(source, options);
    let mut state = ParagraphState::default();

    while let Some(ch) = scanner.cursor.next() {
        let line_start = state.after_line_break || scanner.cursor.at_stream_start();
        state = match ch {
            '\n' => line_break(&mut scanner, state),
            _ => match handler_for(ch, line_start) {
                Some(handler) => state.after(handler(&mut scanner)),
                None => {
                    scanner.out.push_escaped(ch);
                    state.after_text()
                }
            },
        };
    }

    if state.open {
        scanner.out.push_str("\n</p>");
    }

    let html = scanner.into_output();
    debug!(bytes = html.len(), "converted document");
    html
}

/// Look up the handler triggered by `ch`.
pub fn handler_for(ch: char, line_start: bool) -> Option<Handler> {
    let line_start_handlers = LINE_START_HANDLERS.iter().filter(|_| line_start);
    line_start_handlers
        .chain(HANDLERS.iter())
        .find(|(trigger, _)| *trigger == ch)
        .map(|(_, handler)| *handler)
}

/// Apply the paragraph policy to a line break that has just been consumed.
fn line_break(scanner: &mut Scanner<'_>, mut state: ParagraphState) -> ParagraphState {
    if state.open {
        scanner.out.push_str("\n</p>");
        state.open = false;
    }

    if state.after_line_break {
        match scanner.cursor.peek() {
            None => {}
            Some('[') => scanner.out.push('\n'),
            Some(_) => {
                if state.after_block {
                    scanner.out.push('\n');
                    state.after_block = false;
                }
                scanner.out.push_str("<p>\n");
                state.open = true;
            }
        }
    } else {
        scanner.out.push('\n');
    }

    state.after_line_break = true;
    state
}
