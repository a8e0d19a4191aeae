use crate::{ast::Node, parsing::Parser};

use super::kinds::{FenceKind, ListKind};

impl Iterator for Parser<'_> {
    type Item = Node;

    /// Yields the next top-level node.
    ///
    /// Every pass through the loop consumes at least one character: a
    /// directive that succeeded, a recognized block, or the plain-text
    /// fallback, which always takes its first character.
    fn next(&mut self) -> Option<Node> {
        loop {
            let c = self.cursor.current()?;
            let line = self.cursor.line();

            if self.try_directive(c).is_some() {
                log::trace!("line {line}: directive");
                continue;
            }
            if let Some(node) = self.try_block(c).or_else(|| self.read_plain_text()) {
                log::trace!("line {line}: {}", node.kind());
                return Some(node);
            }
        }
    }
}

impl Parser<'_> {
    /// Constructs that update parser state without producing a node.
    fn try_directive(&mut self, c: char) -> Option<()> {
        match c {
            '@' => self.try_meta(),
            'i' => self.try_ignore(),
            _ => None,
        }
    }

    fn try_block(&mut self, c: char) -> Option<Node> {
        match c {
            '"' => self.try_multiline_quote(),
            '[' | '{' => {
                let kind = ListKind::from_open(c);
                debug_assert!(kind.is_some(), "list dispatched on {c:?}");
                let kind = kind?;
                self.try_list(kind).map(|list| kind.node(list))
            }
            '#' => self.try_heading().or_else(|| self.try_table()),
            '=' => self
                .try_title()
                .or_else(|| self.try_code_fence(FenceKind::Equals)),
            '`' => self.try_code_fence(FenceKind::Backticks),
            '|' => self.try_line_quote(),
            '-' => self.try_theme_break(),
            '!' | 'i' => self.try_image(),
            'v' => self.try_video(),
            '\\' => self.try_line_break(),
            _ => None,
        }
    }
}
