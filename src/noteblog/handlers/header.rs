//! Headers: `#`, `##`, ... at the start of a line.

use crate::noteblog::scanner::{Construct, Scanner};

/// Deepest header level HTML can express.
pub const MAX_LEVEL: usize = 6;

/// Handle a line-initial `#`.
///
/// The run of `#` gives the level and the first space ends it. That space is
/// kept as part of the header text. The rest of the line is copied with entity
/// substitution; the line break is consumed. A run that is not followed by a
/// space, or is deeper than [`MAX_LEVEL`], is written back literally.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    let mut level = 1;
    loop {
        match scanner.cursor.next() {
            Some('#') => level += 1,
            Some(' ') if level <= MAX_LEVEL => break,
            other => {
                scanner.out.push_repeated('#', level);
                if other.is_some() {
                    scanner.cursor.unread();
                }
                return Construct::Inline;
            }
        }
    }

    scanner.out.push_str(&format!("<h{}> ", level));
    while let Some(ch) = scanner.cursor.next() {
        if ch == '\n' {
            break;
        }
        scanner.out.push_escaped(ch);
    }
    scanner.out.push_str(&format!("</h{}>", level));

    Construct::Block
}
