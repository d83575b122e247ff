//! Pipe tables.
//!
//! ```text
//! | head | head |
//! |------|------|
//! | cell | cell |
//! ```
//!
//! Cell text is kept as written, surrounding spaces included. Column counts are
//! not checked and pipes cannot be escaped.

use crate::noteblog::scanner::{Construct, Scanner};

#[derive(Debug, Clone, Copy)]
enum Cell {
    Head,
    Data,
}

impl Cell {
    fn open(self) -> &'static str {
        match self {
            Cell::Head => "<th>",
            Cell::Data => "<td>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Cell::Head => "</th>\n",
            Cell::Data => "</td>\n",
        }
    }
}

/// Handle a `|`: header row, discarded border row, then body rows up to the
/// first line that does not start with `|`.
pub fn render(scanner: &mut Scanner<'_>) -> Construct {
    scanner.out.push_str(&format!(
        "<table class=\"{}\">\n",
        scanner.options.table_class
    ));

    scanner.out.push_str("<thead>\n<tr>\n");
    row_cells(scanner, Cell::Head);
    scanner.out.push_str("</tr>\n</thead>\n");
    if scanner.cursor.eat('\n') {
        skip_line(scanner);
    }

    scanner.out.push_str("<tbody>\n");
    while scanner.cursor.eat('|') {
        scanner.out.push_str("<tr>\n");
        row_cells(scanner, Cell::Data);
        scanner.out.push_str("</tr>\n");
        if !scanner.cursor.eat('\n') {
            break;
        }
        // A text line right after the table keeps its line break for the driver.
        if !matches!(scanner.cursor.peek(), Some('|' | '\n') | None) {
            scanner.cursor.unread();
            break;
        }
    }
    scanner.out.push_str("</tbody>\n</table>");

    Construct::Block
}

/// Write the cells of one row whose leading `|` is already consumed.
///
/// Stops before the line break that ends the row.
fn row_cells(scanner: &mut Scanner<'_>, cell: Cell) {
    scanner.out.push_str(cell.open());
    let mut cell_open = true;
    while let Some(ch) = scanner.cursor.next() {
        match ch {
            '\n' => {
                scanner.cursor.unread();
                break;
            }
            '|' => {
                scanner.out.push_str(cell.close());
                cell_open = false;
                match scanner.cursor.peek() {
                    None | Some('\n') => break,
                    Some(_) => {
                        scanner.out.push_str(cell.open());
                        cell_open = true;
                    }
                }
            }
            _ => scanner.out.push_escaped(ch),
        }
    }
    if cell_open {
        scanner.out.push_str(cell.close());
    }
}

fn skip_line(scanner: &mut Scanner<'_>) {
    while let Some(ch) = scanner.cursor.next() {
        if ch == '\n' {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noteblog::options::ConvertOptions;
    use crate::noteblog::scanner::test_support::{run, run_with};

    #[test]
    fn header_only() {
        let (html, construct, rest) = run(render, " Table | Head |");
        assert_eq!(
            html,
            "<table class=\"table is-hoverable\">\n<thead>\n<tr>\n<th> Table </th>\n\
             <th> Head </th>\n</tr>\n</thead>\n<tbody>\n</tbody>\n</table>"
        );
        assert_eq!(construct, Construct::Block);
        assert_eq!(rest, "");
    }

    #[test]
    fn border_row_is_discarded() {
        let (html, _, _) = run(render, " a |\n|--|");
        assert_eq!(
            html,
            "<table class=\"table is-hoverable\">\n<thead>\n<tr>\n<th> a </th>\n\
             </tr>\n</thead>\n<tbody>\n</tbody>\n</table>"
        );
    }

    #[test]
    fn body_rows_until_blank_line() {
        let (html, _, rest) = run(render, " h |\n|-|\n| <1> |\n| 2 - 3 | |\n\nafter");
        assert_eq!(
            html,
            "<table class=\"table is-hoverable\">\n<thead>\n<tr>\n<th> h </th>\n\
             </tr>\n</thead>\n<tbody>\n<tr>\n<td> &lt;1&gt; </td>\n</tr>\n\
             <tr>\n<td> 2 &ndash; 3 </td>\n<td> </td>\n</tr>\n</tbody>\n</table>"
        );
        assert_eq!(rest, "\nafter");
    }

    #[test]
    fn non_pipe_line_ends_the_body() {
        let (html, _, rest) = run(render, " h |\n|-|\n| c |\ntext");
        assert!(html.ends_with("<td> c </td>\n</tr>\n</tbody>\n</table>"));
        assert_eq!(rest, "\ntext");
    }

    #[test]
    fn cells_without_trailing_pipe_are_closed() {
        let (html, _, _) = run(render, " h\n|-|\n| a | b");
        assert!(html.contains("<th> h</th>\n</tr>"));
        assert!(html.contains("<td> a </td>\n<td> b</td>\n</tr>"));
    }

    #[test]
    fn uses_configured_class() {
        let options = ConvertOptions {
            table_class: "data".to_string(),
            ..ConvertOptions::default()
        };
        let (html, _, _) = run_with(render, " h |", &options);
        assert!(html.starts_with("<table class=\"data\">\n"));
    }
}
