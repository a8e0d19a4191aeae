use crate::{ast::Node, parsing::Parser};

use super::kinds::{
    CodeFence, FenceKind, HeadingSyntax, Ignore, LineBreak, LineQuote, ListKind, Media, Meta,
    MultilineQuote, TableSyntax, ThemeBreak, TitleSyntax,
};

impl Parser<'_> {
    /// True when some construct would be tried at the cursor.
    ///
    /// Only the triggers are checked; whether the construct then parses is
    /// up to its recognizer. Lists already known to fail are skipped.
    pub(crate) fn at_block_start(&self) -> bool {
        let cur = &self.cursor;
        MultilineQuote::opens(cur)
            || Meta::opens(cur)
            || Ignore::opens(cur)
            || (ListKind::ALL.iter().any(|kind| kind.opens(cur))
                && !self.failed_lists.contains(&cur.pos()))
            || HeadingSyntax::opens(cur)
            || TableSyntax::opens(cur)
            || TitleSyntax::opens(cur)
            || CodeFence::opens(cur, FenceKind::Equals)
            || CodeFence::opens(cur, FenceKind::Backticks)
            || LineQuote::opens(cur)
            || ThemeBreak::opens(cur)
            || Media::opens_image(cur)
            || Media::opens_video(cur)
            || LineBreak::opens(cur)
    }

    /// Consumes a paragraph.
    ///
    /// The first character is always taken literally, which guarantees
    /// progress after a failed recognizer. Reading stops before the next
    /// construct or at a blank line. Returns `None` for whitespace-only spans.
    pub(crate) fn read_plain_text(&mut self) -> Option<Node> {
        let first = self.cursor.advance()?;
        let mut span = String::from(first);
        let mut prev = first;

        loop {
            if prev == '\n' && self.cursor.rest_of_line_is_blank() {
                break;
            }
            if self.at_block_start() {
                break;
            }
            match self.cursor.advance() {
                Some(c) => {
                    span.push(c);
                    prev = c;
                }
                None => break,
            }
        }

        let text = crate::parsing::inline::resolve_inline(&span);
        (!text.is_empty()).then_some(Node::TextBlock(text))
    }
}
