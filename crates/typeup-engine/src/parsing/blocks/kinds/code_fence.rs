use crate::{
    ast::{Code, Node},
    parsing::{Parser, cursor::Cursor},
};

/// The two fence spellings for code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Equals,
    Backticks,
}

impl FenceKind {
    pub const fn fence(self) -> &'static str {
        match self {
            FenceKind::Equals => "===",
            FenceKind::Backticks => "```",
        }
    }
}

/// Fenced code block. Everything between the fences is kept verbatim.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE_LEN: usize = 3;

    pub fn opens(cur: &Cursor<'_>, kind: FenceKind) -> bool {
        cur.is_start_of_line() && cur.ahead_is(kind.fence())
    }
}

impl Parser<'_> {
    pub(crate) fn try_code_fence(&mut self, kind: FenceKind) -> Option<Node> {
        if !CodeFence::opens(&self.cursor, kind) {
            return None;
        }
        let fence = kind.fence();

        self.attempt(|p| {
            p.cursor.advance_n(CodeFence::FENCE_LEN);
            if !p.cursor.rest_of_line_is_blank() {
                p.warn(format!(
                    "non space characters are not allowed after '{fence}' in code blocks"
                ));
                return None;
            }
            p.cursor.skip_line_end();

            let mut text = String::new();
            loop {
                if CodeFence::opens(&p.cursor, kind) {
                    p.cursor.advance_n(CodeFence::FENCE_LEN);
                    if p.cursor.rest_of_line_is_blank() {
                        p.cursor.skip_line_end();
                        break;
                    }
                    p.warn(format!(
                        "no characters allowed in the same line after '{fence}'"
                    ));
                    text.push_str(fence);
                    continue;
                }
                match p.cursor.advance() {
                    Some(c) => text.push(c),
                    None => {
                        p.warn("possible code block not terminated");
                        return None;
                    }
                }
            }

            Some(Node::Code(Code {
                text: text.trim_matches('\n').to_string(),
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::parse_document;

    fn code(src: &str) -> Option<String> {
        match parse_document(src).document.nodes.first() {
            Some(Node::Code(c)) => Some(c.text.clone()),
            _ => None,
        }
    }

    #[test]
    fn both_fences_work() {
        assert_eq!(code("===\nlet x = 1;\n===").as_deref(), Some("let x = 1;"));
        assert_eq!(code("```\nfn main() {}\n```\n").as_deref(), Some("fn main() {}"));
    }

    #[test]
    fn content_is_raw() {
        assert_eq!(
            code("```\n# not a heading\n*not bold* [x|y]\n```").as_deref(),
            Some("# not a heading\n*not bold* [x|y]")
        );
    }

    #[test]
    fn other_fence_does_not_close() {
        assert_eq!(code("===\n```\n===").as_deref(), Some("```"));
    }

    #[test]
    fn closer_with_trailing_text_stays_in_content() {
        let parsed = parse_document("```\na\n``` b\n```");
        assert!(matches!(&parsed.document.nodes[0], Node::Code(c) if c.text == "a\n``` b"));
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn opener_with_text_fails() {
        let chars: Vec<char> = "=== rust\ncode\n===".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_code_fence(FenceKind::Equals), None);
        assert_eq!(p.cursor().pos(), 0);
        assert_eq!(p.diagnostics().len(), 1);
    }

    #[test]
    fn unterminated_restores() {
        let chars: Vec<char> = "```\nnever closed\n".chars().collect();
        let mut p = Parser::new(&chars);
        assert_eq!(p.try_code_fence(FenceKind::Backticks), None);
        assert_eq!(p.cursor().pos(), 0);
        let messages: Vec<_> = p.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["possible code block not terminated"]);
    }
}
