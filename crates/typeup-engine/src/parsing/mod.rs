pub mod blocks;
pub mod cursor;
pub mod inline;

use std::collections::{BTreeMap, HashSet};

use crate::{
    ast::{Document, Node},
    diagnostics::{Diagnostic, Diagnostics},
};

use cursor::Cursor;

#[derive(Debug)]
pub struct ParsedDoc {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a whole document in one pass.
///
/// Line endings are normalized to `\n` first.
pub fn parse_document(src: &str) -> ParsedDoc {
    let chars: Vec<char> = normalize_line_endings(src).chars().collect();
    let mut parser = Parser::new(&chars);
    let nodes: Vec<Node> = parser.by_ref().collect();
    let (meta, diagnostics) = parser.finish();

    ParsedDoc {
        document: Document { nodes, meta },
        diagnostics: diagnostics.into_vec(),
    }
}

pub fn normalize_line_endings(src: &str) -> String {
    src.replace("\r\n", "\n").replace('\r', "\n")
}

/// Block-level parser over one document.
///
/// Yields top-level [`Node`]s as an iterator (see [`blocks::dispatch`]).
/// Metadata and diagnostics belong to this instance only and are handed
/// back by [`Parser::finish`].
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    meta: BTreeMap<String, String>,
    diagnostics: Diagnostics,
    /// Positions where a list failed to parse. A retry from the same
    /// position would fail the same way.
    pub(crate) failed_lists: HashSet<usize>,
}

impl<'a> Parser<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(chars),
            meta: BTreeMap::new(),
            diagnostics: Diagnostics::new(),
            failed_lists: HashSet::new(),
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn meta(&self) -> &BTreeMap<String, String> {
        &self.meta
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn finish(self) -> (BTreeMap<String, String>, Diagnostics) {
        (self.meta, self.diagnostics)
    }

    /// Runs a recognizer speculatively.
    ///
    /// The cursor is rewound to its entry state unless the recognizer
    /// returns `Some`. Warnings it emitted are kept either way.
    pub(crate) fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mark = self.cursor.mark();
        let out = f(self);
        if out.is_none() {
            log::debug!("backtracking to line {}:{}", mark.line, mark.col);
            self.cursor.restore(mark);
        }
        out
    }

    /// Records a warning at the cursor's current line.
    pub(crate) fn warn(&mut self, message: impl Into<String>) {
        let line = self.cursor.line();
        self.diagnostics.warn_at(line, message);
    }

    pub(crate) fn warn_at(&mut self, line: usize, message: impl Into<String>) {
        self.diagnostics.warn_at(line, message);
    }

    /// Sets a metadata entry; a later write to the same key wins.
    pub(crate) fn set_meta(&mut self, key: &str, value: &str) {
        if let Some(old) = self.meta.insert(key.to_string(), value.to_string())
            && old != value
        {
            log::debug!("metadata '{key}' changed from '{old}' to '{value}'");
        }
    }
}

#[cfg(test)]
mod tests;
