use crate::{
    ast::{Heading, Node, TextNode},
    parsing::{Parser, blocks::kinds::TableSyntax, cursor::Cursor, inline::resolve_inline},
};

/// `#`-prefixed heading; the number of hashes is the level.
pub struct HeadingSyntax;

impl HeadingSyntax {
    pub const HASH: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Lines ending in `{` open a table instead.
    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line()
            && cur.current() == Some(Self::HASH)
            && cur.line_last_char() != Some(TableSyntax::OPEN)
    }
}

/// Short heading `=# Title`: a level 1 heading that also sets the
/// document title.
pub struct TitleSyntax;

impl TitleSyntax {
    pub const MARKER: &'static str = "=#";

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line() && cur.ahead_is(Self::MARKER)
    }
}

impl Parser<'_> {
    pub(crate) fn try_heading(&mut self) -> Option<Node> {
        if !HeadingSyntax::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            let start = p.cursor.line();
            let mut hashes = 0usize;
            while p.cursor.current() == Some(HeadingSyntax::HASH) {
                p.cursor.advance();
                hashes += 1;
            }

            match p.cursor.current() {
                None | Some('\n') => {
                    p.warn("heading possibly missing title");
                    return None;
                }
                Some(c) if !c.is_whitespace() => {
                    p.warn("heading possibly missing a space after '#'");
                    return None;
                }
                Some(_) => {}
            }

            let title = resolve_inline(&p.cursor.read_line_rest());
            if title.is_empty() {
                p.warn("heading possibly missing title");
                return None;
            }
            p.cursor.skip_line_end();

            let max = usize::from(HeadingSyntax::MAX_LEVEL);
            if hashes > max {
                p.warn_at(
                    start,
                    format!(
                        "too many '#' for a heading, maximum is {}",
                        HeadingSyntax::MAX_LEVEL
                    ),
                );
            }
            let level = u8::try_from(hashes.min(max)).unwrap_or(HeadingSyntax::MAX_LEVEL);

            Some(Node::Heading(Heading {
                level,
                title: TextNode::Block(title),
            }))
        })
    }

    pub(crate) fn try_title(&mut self) -> Option<Node> {
        if !TitleSyntax::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            p.cursor.advance_n(TitleSyntax::MARKER.len());
            match p.cursor.current() {
                None | Some('\n') => {
                    p.warn("heading missing text");
                    return None;
                }
                Some(c) if !c.is_whitespace() => {
                    p.warn("heading declaration possibly missing a space");
                    return None;
                }
                Some(_) => {}
            }

            let title = resolve_inline(&p.cursor.read_line_rest());
            if title.is_empty() {
                p.warn("heading missing text");
                return None;
            }
            p.cursor.skip_line_end();

            p.set_meta("title", &title.plain());
            Some(Node::Heading(Heading {
                level: 1,
                title: TextNode::Block(title),
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::parsing::parse_document;

    fn heading(node: &Node) -> (u8, String) {
        match node {
            Node::Heading(h) => (h.level, h.title.plain()),
            other => panic!("expected heading, got {other:?}"),
        }
    }

    #[rstest]
    #[case("# One", 1, "One")]
    #[case("### Three *bold*", 3, "Three bold")]
    #[case("######   Six", 6, "Six")]
    fn levels(#[case] src: &str, #[case] level: u8, #[case] title: &str) {
        let parsed = parse_document(src);
        assert_eq!(heading(&parsed.document.nodes[0]), (level, title.to_string()));
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn level_is_clamped_with_warning() {
        let parsed = parse_document("######## Deep");
        assert_eq!(heading(&parsed.document.nodes[0]), (6, "Deep".to_string()));
        assert_eq!(parsed.diagnostics.len(), 1);
        assert!(parsed.diagnostics[0].message.contains("maximum is 6"));
    }

    #[rstest]
    #[case("#NoSpace")]
    #[case("#")]
    #[case("##   \nnext")]
    fn malformed_heading_restores(#[case] src: &str) {
        let chars: Vec<char> = src.chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_heading(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert_eq!(p.diagnostics().len(), 1);
    }

    #[test]
    fn table_opener_is_not_a_heading() {
        let chars: Vec<char> = "# , {\na, b\n}".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_heading(), None);
        assert!(p.diagnostics().is_empty());
    }

    #[test]
    fn title_sets_metadata() {
        let parsed = parse_document("=# My *Page*\ntext");
        assert_eq!(heading(&parsed.document.nodes[0]), (1, "My Page".to_string()));
        assert_eq!(parsed.document.title(), Some("My Page"));
    }

    #[test]
    fn later_title_wins() {
        let parsed = parse_document("=# First\n=# Second");
        assert_eq!(parsed.document.title(), Some("Second"));
        assert_eq!(parsed.document.nodes.len(), 2);
    }

    #[rstest]
    #[case("=#Title", "heading declaration possibly missing a space")]
    #[case("=#", "heading missing text")]
    #[case("=#   ", "heading missing text")]
    fn malformed_title(#[case] src: &str, #[case] message: &str) {
        let chars: Vec<char> = src.chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_title(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert!(p.meta().is_empty());
        assert_eq!(p.diagnostics().iter().next().map(|d| d.message.as_str()), Some(message));
    }
}
