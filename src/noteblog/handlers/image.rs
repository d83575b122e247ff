//! Image embeds: `![[file.png]]`.

use crate::noteblog::scanner::{Construct, Scanner};

/// Handle a `!`.
///
/// Only `![[name]]` is an embed; any other `!` is literal, as is an embed left
/// open at the end of its line. Brackets inside a closed name are dropped. The
/// name is joined to the configured image directory as-is. A line break right
/// after the embed is consumed.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    if !scanner.cursor.eat('[') {
        scanner.out.push('!');
        return Construct::Inline;
    }
    if !scanner.cursor.eat('[') {
        scanner.out.push_str("![");
        return Construct::Inline;
    }

    let start = scanner.cursor.rest();
    let mut name = String::new();
    loop {
        match scanner.cursor.next() {
            Some(']') if scanner.cursor.eat(']') => break,
            Some('[' | ']') => {}
            Some('\n') | None => {
                scanner.cursor.unread();
                let consumed = &start[..start.len() - scanner.cursor.rest().len()];
                scanner.out.push_str("![[");
                consumed.chars().for_each(|ch| scanner.out.push_escaped(ch));
                return Construct::Inline;
            }
            Some(ch) => name.push(ch),
        }
    }

    scanner.out.push_str(&format!(
        "<figure class=\"image\">\n<img src=\"{}/{}\">\n</figure>",
        scanner.options.image_directory, name
    ));
    scanner.cursor.eat('\n');

    Construct::Block
}
