//! Emphasis: `*italic*`, `**bold**` and `***both***`.

use crate::noteblog::scanner::{Construct, Scanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wrapper {
    Italic,
    Bold,
    ItalicBold,
}

impl Wrapper {
    fn from_run(stars: usize) -> Option<Self> {
        match stars {
            1 => Some(Wrapper::Italic),
            2 => Some(Wrapper::Bold),
            3 => Some(Wrapper::ItalicBold),
            _ => None,
        }
    }

    fn open(self) -> &'static str {
        match self {
            Wrapper::Italic => "<i>",
            Wrapper::Bold => "<b>",
            Wrapper::ItalicBold => "<i><b>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Wrapper::Italic => "</i>",
            Wrapper::Bold => "</b>",
            Wrapper::ItalicBold => "</b></i>",
        }
    }

    fn stars(self) -> usize {
        match self {
            Wrapper::Italic => 1,
            Wrapper::Bold => 2,
            Wrapper::ItalicBold => 3,
        }
    }
}

/// Handle a `*`.
///
/// The opening run picks the wrapper and the span ends at the first run of the
/// same length. Shorter runs inside the span are literal text. At end of stream
/// the wrapper is closed anyway; a run with no text after it, or longer than
/// three, is written back literally.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    let mut stars = 1;
    while scanner.cursor.eat('*') {
        stars += 1;
    }

    let wrapper = match Wrapper::from_run(stars) {
        Some(wrapper) if !scanner.cursor.is_eof() => wrapper,
        _ => {
            scanner.out.push_repeated('*', stars);
            return Construct::Inline;
        }
    };

    scanner.out.push_str(wrapper.open());
    let mut pending = 0;
    while let Some(ch) = scanner.cursor.next() {
        if ch == '*' {
            pending += 1;
            if pending == wrapper.stars() {
                pending = 0;
                break;
            }
            continue;
        }
        scanner.out.push_repeated('*', pending);
        pending = 0;
        scanner.out.push_escaped(ch);
    }
    scanner.out.push_repeated('*', pending);
    scanner.out.push_str(wrapper.close());

    Construct::Inline
}
