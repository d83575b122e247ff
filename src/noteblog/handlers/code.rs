//! Inline code spans and fenced code blocks.

use crate::noteblog::scanner::{Construct, Scanner};

const FENCE: usize = 3;

/// Handle a backtick, classified by the length of its run:
///
/// - 1: inline code, entity-substituted, up to the next backtick
/// - 2: empty inline code, nothing is written
/// - 3 to 5: fenced block, the rest of the fence line (language tag) is dropped
///   and the body is copied verbatim up to the closing fence
/// - 6 or more: an opened and immediately closed fenced block
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    let mut ticks = 1;
    while scanner.cursor.eat('`') {
        ticks += 1;
    }

    match ticks {
        1 => inline_code(scanner),
        2 => {}
        n if n < 2 * FENCE => fenced_block(scanner),
        _ => scanner.out.push_str("<pre><code>\n</code></pre>"),
    }

    Construct::Inline
}

fn inline_code(scanner: &mut Scanner<'_>) {
    scanner.out.push_str("<code>");
    while let Some(ch) = scanner.cursor.next() {
        if ch == '`' {
            break;
        }
        scanner.out.push_escaped(ch);
    }
    scanner.out.push_str("</code>");
}

/// The body of a fenced block is opaque: no entities, no paragraphs, no markup.
fn fenced_block(scanner: &mut Scanner<'_>) {
    while let Some(ch) = scanner.cursor.next() {
        if ch == '\n' {
            break;
        }
    }

    scanner.out.push_str("<pre><code>\n");
    let mut pending = 0;
    while let Some(ch) = scanner.cursor.next() {
        if ch == '`' {
            pending += 1;
            if pending == FENCE {
                pending = 0;
                while scanner.cursor.eat('`') {}
                break;
            }
            continue;
        }
        scanner.out.push_repeated('`', pending);
        pending = 0;
        scanner.out.push(ch);
    }
    scanner.out.push_repeated('`', pending);
    scanner.out.push_str("</code></pre>");
}
