/// A cursor for character-by-character parsing with line/column tracking.
///
/// Operates over a borrowed character slice so any position can be revisited:
/// recognizers take a [`Mark`] before looking at input and hand it back to
/// [`Cursor::restore`] when they decide the input is not theirs.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
    line: usize,
    col: usize,
}

/// A saved cursor state. Restoring one is O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub pos: usize,
    pub line: usize,
    pub col: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `chars`, on line 1, column 1.
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Index of the current character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the current character.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns true once every character has been consumed.
    pub fn eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// The character under the cursor, `None` past the end.
    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Looks `n` characters ahead of the current one (`peek(0)` is the current).
    pub fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// The character right before the cursor, if any.
    pub fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|i| self.chars.get(i).copied())
    }

    /// Consumes the current character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Consumes up to `n` characters, stopping early at the end.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    pub fn restore(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.line = mark.line;
        self.col = mark.col;
    }

    /// Runs a speculative parse, rewinding to the entry state when it fails.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.mark();
        let out = f(self);
        if out.is_none() {
            self.restore(mark);
        }
        out
    }

    /// True at position 0 or right after a newline.
    pub fn is_start_of_line(&self) -> bool {
        matches!(self.prev(), None | Some('\n'))
    }

    /// Checks if the remaining input starts with `pat`.
    pub fn ahead_is(&self, pat: &str) -> bool {
        let mut i = self.pos;
        for c in pat.chars() {
            if self.chars.get(i) != Some(&c) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// True if, ignoring whitespace, the whole line under the cursor is `c`.
    pub fn line_only_char_is(&self, c: char) -> bool {
        let start = self.chars[..self.pos.min(self.chars.len())]
            .iter()
            .rposition(|&ch| ch == '\n')
            .map_or(0, |i| i + 1);
        let end = self.chars[start..]
            .iter()
            .position(|&ch| ch == '\n')
            .map_or(self.chars.len(), |i| start + i);

        let mut significant = self.chars[start..end]
            .iter()
            .filter(|ch| !ch.is_whitespace());
        significant.next() == Some(&c) && significant.next().is_none()
    }

    /// True if only whitespace remains between the cursor and the line end.
    pub fn rest_of_line_is_blank(&self) -> bool {
        self.chars[self.pos.min(self.chars.len())..]
            .iter()
            .take_while(|&&ch| ch != '\n')
            .all(|ch| ch.is_whitespace())
    }

    /// Last non-whitespace character of the current line, from the cursor on.
    pub fn line_last_char(&self) -> Option<char> {
        self.chars[self.pos.min(self.chars.len())..]
            .iter()
            .take_while(|&&ch| ch != '\n')
            .filter(|ch| !ch.is_whitespace())
            .last()
            .copied()
    }

    /// Consumes the rest of the line, leaving the cursor on the newline.
    pub fn read_line_rest(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            out.push(c);
            self.advance();
        }
        out
    }

    /// Reads whole lines until one that holds only `close`, which is consumed
    /// along with its newline. Each line comes with its 1-based line number.
    ///
    /// Returns `None` when the input ends first.
    pub fn read_lines_until_sole(&mut self, close: char) -> Option<Vec<(usize, String)>> {
        let mut lines = vec![];
        loop {
            if self.eof() {
                return None;
            }
            if self.line_only_char_is(close) {
                self.read_line_rest();
                self.advance();
                return Some(lines);
            }
            let line = self.line;
            let text = self.read_line_rest();
            lines.push((line, text));
            self.advance()?;
        }
    }

    /// Consumes trailing whitespace and the newline that ends the line.
    ///
    /// Does nothing if non-space characters remain on the line.
    pub fn skip_line_end(&mut self) {
        if !self.rest_of_line_is_blank() {
            return;
        }
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
    }
}
