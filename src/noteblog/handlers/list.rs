//! Unordered lists: consecutive lines starting with `-`.

use crate::noteblog::handlers::{code, emphasis, footnote};
use crate::noteblog::scanner::{Construct, Scanner};

/// Handle a line-initial `-`.
///
/// Every following line that starts with `-` is another item. Items may hold
/// emphasis, inline code and footnote references. A blank line or a line that
/// starts with anything else ends the list; its first character is pushed back.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    scanner.out.push_str("<ul>\n<li>");
    let mut item_open = true;
    let mut line_start = false;

    while let Some(ch) = scanner.cursor.next() {
        match ch {
            '\n' if item_open => {
                scanner.out.push_str("</li>\n");
                item_open = false;
                line_start = true;
            }
            '-' if line_start => {
                scanner.out.push_str("<li>");
                item_open = true;
                line_start = false;
            }
            _ if line_start => {
                scanner.cursor.unread();
                break;
            }
            '[' => {
                footnote::render(scanner);
            }
            '*' => {
                emphasis::render(scanner);
            }
            '`' => {
                code::render(scanner);
            }
            _ => scanner.out.push_escaped(ch),
        }
    }

    if item_open {
        scanner.out.push_str("</li>\n");
    }
    scanner.out.push_str("</ul>");

    Construct::Block
}
