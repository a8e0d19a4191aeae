use crate::{
    ast::Node,
    parsing::{Parser, cursor::Cursor},
};

/// Explicit line break: a backslash alone on its line.
pub struct LineBreak;

impl LineBreak {
    pub const MARKER: char = '\\';

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line()
            && cur.current() == Some(Self::MARKER)
            && cur.line_only_char_is(Self::MARKER)
    }
}

impl Parser<'_> {
    pub(crate) fn try_line_break(&mut self) -> Option<Node> {
        if !LineBreak::opens(&self.cursor) {
            return None;
        }
        self.cursor.advance();
        self.cursor.skip_line_end();
        Some(Node::LineBreak)
    }
}
