//! Footnote references `[^n]` and definitions `[^n]: text`.

use crate::noteblog::scanner::{Construct, Scanner};

/// Handle a `[`.
///
/// `[^digits]` followed by `:` is a definition and renders the rest of its line
/// as a footnote paragraph; otherwise it is an inline reference anchor. Both use
/// the sequential number of the original one. Anything that is not
/// `[^digits]` is written back literally.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    if !scanner.cursor.eat('^') {
        scanner.out.push('[');
        return Construct::Inline;
    }

    let mut digits = String::new();
    while let Some(ch) = scanner.cursor.peek().filter(char::is_ascii_digit) {
        digits.push(ch);
        scanner.cursor.next();
    }

    if digits.is_empty() || !scanner.cursor.eat(']') {
        scanner.out.push_str("[^");
        scanner.out.push_str(&digits);
        return Construct::Inline;
    }

    if scanner.cursor.eat(':') {
        definition(scanner, &digits);
    } else {
        let sequential = scanner.footnotes.reference(&digits);
        scanner.out.push_str(&format!(
            "<a id=\"footnote-anchor-{n}\" href=\"#footnote-{n}\">[{n}]</a>",
            n = sequential
        ));
    }

    Construct::Inline
}

fn definition(scanner: &mut Scanner<'_>, original: &str) {
    let policy = scanner.options.orphan_footnotes;
    let Some(sequential) = scanner.footnotes.definition(original, policy) else {
        while let Some(ch) = scanner.cursor.next() {
            if ch == '\n' {
                break;
            }
        }
        return;
    };

    scanner.out.push_str(&format!(
        "<p id=\"footnote-{n}\">\n<a href=\"#footnote-anchor-{n}\">[{n}]</a>\n",
        n = sequential
    ));
    let ended_line = loop {
        match scanner.copy_escaped() {
            Some('\n') => break true,
            Some(_) => {}
            None => {
                scanner.out.push('\n');
                break false;
            }
        }
    };
    scanner.out.push_str("</p>");
    if ended_line {
        scanner.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noteblog::options::{ConvertOptions, OrphanFootnotes};
    use crate::noteblog::scanner::test_support::{run, run_with};
    use crate::noteblog::scanner::Scanner;

    #[test]
    fn inline_reference() {
        let (html, construct, rest) = run(render, "^4] more");
        assert_eq!(
            html,
            "<a id=\"footnote-anchor-1\" href=\"#footnote-1\">[1]</a>"
        );
        assert_eq!(construct, Construct::Inline);
        assert_eq!(rest, " more");
    }

    #[test]
    fn long_numeral_is_a_reference() {
        let (html, construct, rest) = run(render, "^99999999999] x");
        assert_eq!(
            html,
            "<a id=\"footnote-anchor-1\" href=\"#footnote-1\">[1]</a>"
        );
        assert_eq!(construct, Construct::Inline);
        assert_eq!(rest, " x");
    }

    #[test]
    fn repeated_references_share_a_number() {
        let options = ConvertOptions::default();
        let mut scanner = Scanner::new("[^5][^3][^5]", &options);
        for _ in 0..3 {
            scanner.cursor.next();
            render(&mut scanner);
        }
        let html = scanner.into_output();
        assert_eq!(html.matches("[1]").count(), 2);
        assert_eq!(html.matches("[2]").count(), 1);
    }

    #[test]
    fn definition_uses_the_assigned_number() {
        let options = ConvertOptions::default();
        let mut scanner = Scanner::new("^1]: one\n[^2]: two", &options);
        scanner.footnotes.reference("2");
        scanner.footnotes.reference("1");
        render(&mut scanner);
        scanner.cursor.next();
        render(&mut scanner);
        assert_eq!(
            scanner.into_output(),
            "<p id=\"footnote-2\">\n<a href=\"#footnote-anchor-2\">[2]</a>\n one\n</p>\n\
             <p id=\"footnote-1\">\n<a href=\"#footnote-anchor-1\">[1]</a>\n two\n</p>"
        );
    }

    #[test]
    fn definition_text_is_escaped_but_not_interpreted() {
        let (html, _, _) = run(render, "^1]: see https://a-b.c/?q=#x *y*");
        assert!(html.ends_with(" see https://a&ndash;b.c/?q=#x *y*\n</p>"));
    }

    #[test]
    fn orphan_definition_can_be_dropped() {
        let options = ConvertOptions {
            orphan_footnotes: OrphanFootnotes::Drop,
            ..ConvertOptions::default()
        };
        let (html, _, rest) = run_with(render, "^8]: unused\nnext", &options);
        assert_eq!(html, "");
        assert_eq!(rest, "next");
    }

    #[test]
    fn plain_bracket_is_literal() {
        let (html, _, rest) = run(render, "link]");
        assert_eq!(html, "[");
        assert_eq!(rest, "link]");
    }

    #[test]
    fn caret_without_number_is_literal() {
        let (html, _, rest) = run(render, "^x]");
        assert_eq!(html, "[^");
        assert_eq!(rest, "x]");
    }

    #[test]
    fn unclosed_number_is_literal() {
        let (html, _, rest) = run(render, "^12 x");
        assert_eq!(html, "[^12");
        assert_eq!(rest, " x");
    }
}
