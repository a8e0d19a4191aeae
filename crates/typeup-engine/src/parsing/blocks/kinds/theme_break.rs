use crate::{
    ast::Node,
    parsing::{Parser, cursor::Cursor},
};

/// Horizontal rule: three or more dashes alone on a line.
pub struct ThemeBreak;

impl ThemeBreak {
    pub const DASH: char = '-';
    pub const MARKER: &'static str = "---";

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line() && cur.ahead_is(Self::MARKER)
    }
}

impl Parser<'_> {
    pub(crate) fn try_theme_break(&mut self) -> Option<Node> {
        if !ThemeBreak::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            while p.cursor.current() == Some(ThemeBreak::DASH) {
                p.cursor.advance();
            }
            if !p.cursor.rest_of_line_is_blank() {
                p.warn("theme break line can only contain '-'");
                return None;
            }
            p.cursor.skip_line_end();
            Some(Node::ThemeBreak)
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::parse_document;

    #[test]
    fn dashes_make_a_break() {
        let parsed = parse_document("---\n-----  \n");
        assert_eq!(parsed.document.nodes, vec![Node::ThemeBreak, Node::ThemeBreak]);
    }

    #[test]
    fn trailing_text_fails() {
        let chars: Vec<char> = "--- and more".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_theme_break(), None);
        assert_eq!(p.cursor().pos(), 0);
        assert_eq!(p.diagnostics().len(), 1);
    }
}
