use crate::parsing::{Parser, cursor::Cursor};

/// `ignore {` ... `}` comment block. Its content is dropped.
pub struct Ignore;

impl Ignore {
    pub const KEYWORD: &'static str = "ignore";
    pub const OPEN: char = '{';
    pub const CLOSE: char = '}';

    /// Checks the whole opener line: keyword, optional spaces, `{`.
    pub fn opens(cur: &Cursor<'_>) -> bool {
        if !cur.is_start_of_line() || !cur.ahead_is(Self::KEYWORD) {
            return false;
        }
        let mut probe = cur.clone();
        probe.advance_n(Self::KEYWORD.len());
        while probe.current().is_some_and(|c| c != '\n' && c.is_whitespace()) {
            probe.advance();
        }
        if probe.current() != Some(Self::OPEN) {
            return false;
        }
        probe.advance();
        probe.rest_of_line_is_blank()
    }
}

impl Parser<'_> {
    pub(crate) fn try_ignore(&mut self) -> Option<()> {
        if !Ignore::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            p.cursor.read_line_rest();
            p.cursor.advance();

            let Some(lines) = p.cursor.read_lines_until_sole(Ignore::CLOSE) else {
                p.warn("unterminated ignore block");
                return None;
            };
            log::trace!("ignored {} lines", lines.len());
            Some(())
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ast::Node, parsing::parse_document};

    #[test]
    fn content_is_dropped() {
        let parsed = parse_document("before\n\nignore {\n# hidden\n[\n}\nafter");
        let text: Vec<String> = parsed
            .document
            .nodes
            .iter()
            .map(|n| match n {
                Node::TextBlock(b) => b.plain(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(text, vec!["before", "after"]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn keyword_without_brace_is_text() {
        let chars: Vec<char> = "ignore me {".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_ignore(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert!(p.diagnostics().is_empty());
    }

    #[test]
    fn unterminated_block_warns() {
        let chars: Vec<char> = "ignore{\nsecret\n".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_ignore(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert_eq!(p.diagnostics().len(), 1);
    }
}
