use crate::{
    ast::{List, ListItem, Node},
    parsing::{
        Parser,
        cursor::{Cursor, Mark},
        inline::resolve_inline,
    },
};

/// List flavours. Each list is opened and closed by a bracket that sits
/// alone on its line; every non-blank line in between is one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `[` ... `]`
    Unordered,
    /// `{` ... `}`
    Ordered,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Unordered, ListKind::Ordered];
    /// Lists nested deeper than this are read as text.
    pub const MAX_DEPTH: usize = 256;

    pub const fn open(self) -> char {
        match self {
            ListKind::Unordered => '[',
            ListKind::Ordered => '{',
        }
    }

    pub const fn close(self) -> char {
        match self {
            ListKind::Unordered => ']',
            ListKind::Ordered => '}',
        }
    }

    pub fn from_open(c: char) -> Option<ListKind> {
        Self::ALL.into_iter().find(|kind| kind.open() == c)
    }

    /// True when the cursor sits on a bracket that is alone on its line.
    ///
    /// Unlike other blocks, nested lists may be indented, so this does not
    /// require the start of a line.
    pub fn opens(self, cur: &Cursor<'_>) -> bool {
        cur.current() == Some(self.open()) && cur.line_only_char_is(self.open())
    }

    pub const fn other(self) -> ListKind {
        match self {
            ListKind::Unordered => ListKind::Ordered,
            ListKind::Ordered => ListKind::Unordered,
        }
    }

    fn wrap(self, list: List) -> ListItem {
        match self {
            ListKind::Unordered => ListItem::Unordered(list),
            ListKind::Ordered => ListItem::Ordered(list),
        }
    }

    pub fn node(self, list: List) -> Node {
        match self {
            ListKind::Unordered => Node::UnorderedList(list),
            ListKind::Ordered => Node::OrderedList(list),
        }
    }
}

/// A list whose closing bracket has not been seen yet.
struct OpenList {
    kind: ListKind,
    start: Mark,
    items: Vec<ListItem>,
    line: String,
    /// First closer of the other kind found alone on a line at this level,
    /// with the item count at that point. Were this list to fail, an
    /// enclosing list of that kind would close there.
    foreign_close: Option<(Mark, usize)>,
}

impl Parser<'_> {
    fn list_opens(&self, kind: ListKind) -> bool {
        kind.opens(&self.cursor) && !self.failed_lists.contains(&self.cursor.pos())
    }

    /// Consumes an opener line. An opener on the last line is a stray and
    /// leaves the cursor where it was.
    fn open_list(&mut self, kind: ListKind) -> Option<OpenList> {
        let start = self.cursor.mark();
        self.cursor.read_line_rest();
        if self.cursor.advance().is_none() {
            self.warn(format!("stray '{}'", kind.open()));
            self.failed_lists.insert(start.pos);
            self.cursor.restore(start);
            return None;
        }
        Some(OpenList {
            kind,
            start,
            items: vec![],
            line: String::new(),
            foreign_close: None,
        })
    }

    /// Parses one list and everything nested in it.
    ///
    /// Open lists are kept on an explicit stack. A list still open at the
    /// end of input fails and its opener becomes text in the enclosing
    /// list. Rescanning from there would see exactly what the failed list
    /// saw, so the outcome is decided without reading the input again: a
    /// list of the same kind fails as well, a list of the other kind closes
    /// at the failed list's `foreign_close` if it has one and fails
    /// otherwise.
    pub(crate) fn try_list(&mut self, kind: ListKind) -> Option<List> {
        if !self.list_opens(kind) {
            return None;
        }
        let mut list = self.open_list(kind)?;
        let mut parents: Vec<OpenList> = vec![];

        loop {
            let Some(c) = self.cursor.current() else {
                loop {
                    self.warn(format!(
                        "possible list not terminated with '{}'",
                        list.kind.close()
                    ));
                    self.failed_lists.insert(list.start.pos);
                    log::debug!(
                        "list at line {}:{} failed",
                        list.start.line,
                        list.start.col
                    );

                    let Some(mut parent) = parents.pop() else {
                        self.cursor.restore(list.start);
                        return None;
                    };
                    let opener = ListItem::Text(resolve_inline(&list.kind.open().to_string()));
                    match list.foreign_close {
                        Some((mark, count)) if parent.kind != list.kind => {
                            parent.items.push(opener);
                            parent.items.extend(list.items.into_iter().take(count));
                            parent.line.clear();
                            self.cursor.restore(mark);
                            list = parent;
                            break;
                        }
                        Some((mark, count)) if parent.foreign_close.is_none() => {
                            let before = parent.items.len();
                            parent.items.push(opener);
                            parent.items.extend(list.items.into_iter().take(count));
                            parent.foreign_close = Some((mark, before + 1 + count));
                        }
                        _ => {}
                    }
                    list = parent;
                }
                continue;
            };

            if c == list.kind.close() && self.cursor.line_only_char_is(c) {
                self.cursor.advance();
                self.cursor.skip_line_end();
                let closed = list.kind;
                let done = List { items: list.items };
                let Some(mut parent) = parents.pop() else {
                    return Some(done);
                };
                parent.items.push(closed.wrap(done));
                parent.line.clear();
                list = parent;
                continue;
            }

            if c == list.kind.other().close()
                && list.foreign_close.is_none()
                && self.cursor.line_only_char_is(c)
            {
                list.foreign_close = Some((self.cursor.mark(), list.items.len()));
            }

            if let Some(nested) = ListKind::from_open(c)
                && self.list_opens(nested)
            {
                if parents.len() + 1 >= ListKind::MAX_DEPTH {
                    self.warn(format!(
                        "lists nested deeper than {} are read as text",
                        ListKind::MAX_DEPTH
                    ));
                    self.failed_lists.insert(self.cursor.pos());
                } else if let Some(child) = self.open_list(nested) {
                    parents.push(std::mem::replace(&mut list, child));
                    continue;
                }
            }

            self.cursor.advance();
            if c == '\n' {
                let text = resolve_inline(&list.line);
                if !text.is_empty() {
                    list.items.push(ListItem::Text(text));
                }
                list.line.clear();
            } else {
                list.line.push(c);
            }
        }
    }
}
