use crate::{
    ast::{BlockQuote, Node, TextNode},
    parsing::{Parser, cursor::Cursor, inline::resolve_inline},
};

/// Multiline block quote, fenced by lines of `"""`.
pub struct MultilineQuote;

impl MultilineQuote {
    pub const FENCE: &'static str = "\"\"\"";

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line() && cur.ahead_is(Self::FENCE)
    }
}

/// Single-line block quote. Consecutive `|` lines fold into one quote.
pub struct LineQuote;

impl LineQuote {
    pub const PREFIX: char = '|';

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line() && cur.current() == Some(Self::PREFIX)
    }
}

impl Parser<'_> {
    pub(crate) fn try_multiline_quote(&mut self) -> Option<Node> {
        if !MultilineQuote::opens(&self.cursor) {
            return None;
        }
        let fence_len = MultilineQuote::FENCE.len();

        self.attempt(|p| {
            p.cursor.advance_n(fence_len);
            if !p.cursor.rest_of_line_is_blank() {
                p.warn("no characters allowed after '\"\"\"' in multiline block quotes");
                return None;
            }
            p.cursor.skip_line_end();

            let mut content = String::new();
            loop {
                if MultilineQuote::opens(&p.cursor) {
                    p.cursor.advance_n(fence_len);
                    if p.cursor.rest_of_line_is_blank() {
                        p.cursor.skip_line_end();
                        break;
                    }
                    p.warn("no characters allowed after a closing '\"\"\"' in block quotes");
                    content.push_str(MultilineQuote::FENCE);
                    continue;
                }
                match p.cursor.advance() {
                    Some(c) => content.push(c),
                    None => {
                        p.warn("unexpected end of input in multiline block quote");
                        return None;
                    }
                }
            }

            let text = resolve_inline(&content);
            if text.is_empty() {
                p.warn("multiline block quote is empty");
                return None;
            }
            Some(Node::BlockQuote(BlockQuote {
                text: TextNode::Block(text),
            }))
        })
    }

    pub(crate) fn try_line_quote(&mut self) -> Option<Node> {
        if !LineQuote::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            let start = p.cursor.line();
            let mut lines = vec![];
            while LineQuote::opens(&p.cursor) {
                p.cursor.advance(); // |
                lines.push(p.cursor.read_line_rest());
                p.cursor.advance();
            }

            let text = resolve_inline(&lines.join("\n"));
            if text.is_empty() {
                p.warn_at(start, "empty block quote");
                return None;
            }
            Some(Node::BlockQuote(BlockQuote {
                text: TextNode::Block(text),
            }))
        })
    }
}
