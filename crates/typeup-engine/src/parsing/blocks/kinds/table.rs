use crate::{
    ast::{Node, Table, TextNode},
    parsing::{Parser, cursor::Cursor, inline::resolve_inline},
};

/// Table block: `#<delimiter>{`, one row per line, closed by a lone `}`.
///
/// The first row is the header. Rows are split independently, so ragged
/// tables come out ragged.
pub struct TableSyntax;

impl TableSyntax {
    pub const HASH: char = '#';
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line()
            && cur.current() == Some(Self::HASH)
            && cur.line_last_char() == Some(Self::OPEN)
    }

    /// Splits a row on `delimiter` and resolves each cell.
    pub fn split_row(row: &str, delimiter: &str) -> Vec<TextNode> {
        row.split(delimiter)
            .map(|cell| TextNode::Block(resolve_inline(cell)))
            .collect()
    }
}

impl Parser<'_> {
    pub(crate) fn try_table(&mut self) -> Option<Node> {
        if !TableSyntax::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            let start = p.cursor.line();
            p.cursor.advance(); // #
            let mut delimiter = String::new();
            while let Some(c) = p.cursor.current() {
                if c == TableSyntax::OPEN || c == '\n' {
                    break;
                }
                delimiter.push(c);
                p.cursor.advance();
            }
            let delimiter = delimiter.trim().to_string();
            if delimiter.is_empty() {
                p.warn("table delimiter empty");
                return None;
            }

            p.cursor.advance(); // {
            if !p.cursor.rest_of_line_is_blank() {
                p.warn("wrong table syntax");
                return None;
            }
            p.cursor.skip_line_end();

            let Some(lines) = p.cursor.read_lines_until_sole(TableSyntax::CLOSE) else {
                p.warn("unexpected end of input in table");
                return None;
            };
            let mut rows = lines
                .iter()
                .map(|(_, line)| line.trim())
                .filter(|line| !line.is_empty())
                .map(|line| TableSyntax::split_row(line, &delimiter));

            let Some(headers) = rows.next() else {
                p.warn_at(start, "table is empty");
                return None;
            };
            let rows: Vec<_> = rows.collect();
            if rows.iter().any(|row| row.len() != headers.len()) {
                log::debug!("table at line {start} has ragged rows");
            }

            Some(Node::Table(Table { headers, rows }))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::parse_document;

    fn plain_rows(table: &Table) -> Vec<Vec<String>> {
        std::iter::once(&table.headers)
            .chain(&table.rows)
            .map(|row| row.iter().map(TextNode::plain).collect())
            .collect()
    }

    fn table(src: &str) -> Table {
        match parse_document(src).document.nodes.into_iter().next() {
            Some(Node::Table(t)) => t,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn simple_table() {
        let t = table("#, {\nname, age\nann, 3\n\nbob, *4*\n}\n");
        assert_eq!(
            plain_rows(&t),
            vec![vec!["name", "age"], vec!["ann", "3"], vec!["bob", "4"]]
        );
    }

    #[test]
    fn multi_char_delimiter() {
        let t = table("# || {\na || b\n}");
        assert_eq!(plain_rows(&t), vec![vec!["a", "b"]]);
        assert!(t.rows.is_empty());
    }

    #[test]
    fn ragged_rows_are_kept() {
        let t = table("#;{\nh1;h2;h3\nx;y\n}");
        assert_eq!(t.headers.len(), 3);
        assert_eq!(t.rows[0].len(), 2);
    }

    #[test]
    fn empty_delimiter_fails() {
        let chars: Vec<char> = "#  {\na\n}".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_table(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert_eq!(
            p.diagnostics().iter().next().map(|d| d.message.as_str()),
            Some("table delimiter empty")
        );
    }

    #[test]
    fn unterminated_and_empty_tables_fail() {
        for (src, message) in [
            ("#,{\na,b\n", "unexpected end of input in table"),
            ("#,{\n\n}", "table is empty"),
        ] {
            let chars: Vec<char> = src.chars().collect();
            let mut p = Parser::new(&chars);
            assert_eq!(p.try_table(), None, "{src:?}");
            assert_eq!(p.cursor().pos(), 0);
            assert_eq!(
                p.diagnostics().iter().next().map(|d| d.message.as_str()),
                Some(message)
            );
        }
    }
}
