use crate::parsing::{Parser, cursor::Cursor};

/// Metadata block: `@{key = value}` on one line, or `@{` followed by one
/// `key = value` pair per line and a closing `}` alone on its line.
///
/// Produces no node; pairs go to the document metadata.
pub struct Meta;

impl Meta {
    pub const OPEN: &'static str = "@{";
    pub const CLOSE: char = '}';
    pub const ASSIGN: char = '=';

    pub fn opens(cur: &Cursor<'_>) -> bool {
        cur.is_start_of_line() && cur.ahead_is(Self::OPEN)
    }

    /// Splits `key = value` on the first `=`. The key must not be empty.
    pub fn pair(line: &str) -> Option<(&str, &str)> {
        let (key, value) = line.split_once(Self::ASSIGN)?;
        let key = key.trim();
        (!key.is_empty()).then(|| (key, value.trim()))
    }
}

impl Parser<'_> {
    pub(crate) fn try_meta(&mut self) -> Option<()> {
        if !Meta::opens(&self.cursor) {
            return None;
        }

        self.attempt(|p| {
            p.cursor.advance_n(Meta::OPEN.len());
            if p.cursor.rest_of_line_is_blank() {
                p.meta_lines()
            } else {
                p.meta_inline()
            }
        })
    }

    fn meta_lines(&mut self) -> Option<()> {
        let start = self.cursor.line();
        self.cursor.skip_line_end();
        let Some(lines) = self.cursor.read_lines_until_sole(Meta::CLOSE) else {
            self.warn("unexpected end of input in multiline meta block");
            return None;
        };

        let lines: Vec<_> = lines
            .into_iter()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();
        if lines.is_empty() {
            self.warn_at(start, "meta block is empty");
            return None;
        }

        for (line, text) in &lines {
            match Meta::pair(text) {
                Some((key, value)) => self.set_meta(key, value),
                None => self.warn_at(*line, format!("invalid meta line '{}'", text.trim())),
            }
        }
        Some(())
    }

    fn meta_inline(&mut self) -> Option<()> {
        let mut content = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    self.warn("unexpected end of input in meta block");
                    return None;
                }
                Some('\n') => {
                    self.warn("line break in one-line meta block not allowed");
                    return None;
                }
                Some(Meta::CLOSE) => {
                    self.cursor.advance();
                    break;
                }
                Some(c) => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }

        let Some((key, value)) = Meta::pair(&content) else {
            self.warn("invalid meta block syntax");
            return None;
        };
        self.set_meta(key, value);
        self.cursor.skip_line_end();
        Some(())
    }
}
