use crate::{
    ast::{Anchor, Style, Text, TextBlock, TextNode},
    parsing::cursor::Cursor,
};

use super::kinds::{CodeSpan, Emphasis, Link};

/// Resolves a flat span of text into inline nodes.
///
/// # Raw Zone Precedence
/// Code spans are checked first, then links, then emphasis. Anything that
/// does not form a complete construct is kept as literal text; this never
/// fails.
///
/// # Returns
/// The fragments in source order. Fragments that trim to empty are dropped.
pub fn resolve_inline(s: &str) -> TextBlock {
    let chars: Vec<char> = s.chars().collect();
    let mut cur = Cursor::new(&chars);
    let mut out = vec![];
    let mut text = String::new();

    // Helper to flush accumulated text as a plain Text node
    fn flush_text(out: &mut Vec<TextNode>, text: &mut String) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            out.push(Text::plain(trimmed).into());
        }
        text.clear();
    }

    while let Some(c) = cur.current() {
        let node = try_code_span(&mut cur)
            .or_else(|| try_link(&mut cur))
            .or_else(|| try_emphasis(&mut cur).map(TextNode::Text));
        if let Some(node) = node {
            flush_text(&mut out, &mut text);
            out.push(node);
            continue;
        }
        text.push(c);
        cur.advance();
    }

    flush_text(&mut out, &mut text);
    TextBlock::new(out)
}

/// Attempts to parse an inline code span at the cursor.
///
/// Handles `` `code` `` (with `` \` `` escapes) and `''code''`. Both must
/// close on the same line. On failure, the cursor is restored.
fn try_code_span(cur: &mut Cursor<'_>) -> Option<TextNode> {
    if cur.ahead_is(CodeSpan::QUOTES) {
        return cur
            .attempt(|c| {
                delimited(c, CodeSpan::QUOTES, CodeSpan::QUOTES)
                    .filter(|code| !code.trim().is_empty())
            })
            .map(TextNode::InlineCode);
    }
    if cur.current() != Some(CodeSpan::TICK) {
        return None;
    }

    cur.attempt(|c| {
        c.advance(); // `
        let mut code = String::new();
        loop {
            match c.advance()? {
                '\n' => return None,
                CodeSpan::TICK => break,
                CodeSpan::ESCAPE if c.current() == Some(CodeSpan::TICK) => {
                    code.push(CodeSpan::TICK);
                    c.advance();
                }
                ch => code.push(ch),
            }
        }
        (!code.trim().is_empty()).then_some(TextNode::InlineCode(code))
    })
}

/// Attempts to parse a link at the cursor.
///
/// The bracket content must close on the same line. The label is resolved
/// recursively, so it may carry emphasis.
fn try_link(cur: &mut Cursor<'_>) -> Option<TextNode> {
    if cur.current() != Some(Link::OPEN) {
        return None;
    }

    cur.attempt(|c| {
        c.advance(); // [
        let mut inner = String::new();
        loop {
            match c.advance()? {
                '\n' => return None,
                Link::CLOSE => break,
                ch => inner.push(ch),
            }
        }

        let (label, url) = Link::split(&inner)?;
        let label = if label.is_empty() {
            TextNode::Text(Text::plain(url))
        } else {
            TextNode::Block(resolve_inline(label))
        };
        Some(TextNode::Anchor(Anchor {
            label: Box::new(label),
            url: url.to_string(),
        }))
    })
}

/// Attempts bold or italic at the cursor, long spellings first.
fn try_emphasis(cur: &mut Cursor<'_>) -> Option<Text> {
    if !cur.current().is_some_and(Emphasis::may_open) {
        return None;
    }
    Emphasis::ALL
        .into_iter()
        .find_map(|e| emphasis_at(cur, e, true))
}

/// Detects one emphasis instance of kind `e` starting at the cursor.
///
/// Once the interior is isolated, it is checked for being exactly one
/// instance of the other kind, in which case the result is promoted to
/// [`Style::BoldItalic`]. That check calls back into this function with
/// `nest` cleared, so promotion happens at most once.
fn emphasis_at(cur: &mut Cursor<'_>, e: Emphasis, nest: bool) -> Option<Text> {
    let interior = long_interior(cur, e).or_else(|| short_interior(cur, e))?;

    if nest && let Some(inner) = exact_instance(&interior, e.other()) {
        return Some(Text::styled(Style::BoldItalic, inner));
    }
    Some(Text::styled(e.style(), interior))
}

/// Returns the content of `s` when all of `s` is one `e` instance.
fn exact_instance(s: &str, e: Emphasis) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut cur = Cursor::new(&chars);
    let text = emphasis_at(&mut cur, e, false)?;
    cur.eof().then_some(text.content)
}

fn long_interior(cur: &mut Cursor<'_>, e: Emphasis) -> Option<String> {
    let at_boundary = cur.prev().is_none_or(char::is_whitespace);
    if !at_boundary || !cur.ahead_is(e.long()) {
        return None;
    }
    cur.attempt(|c| delimited(c, e.long(), e.long()).and_then(non_blank))
}

fn short_interior(cur: &mut Cursor<'_>, e: Emphasis) -> Option<String> {
    if cur.current() != Some(e.short()) {
        return None;
    }
    let delim = e.short().to_string();
    cur.attempt(|c| delimited(c, &delim, &delim).and_then(non_blank))
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Consumes `open`, then everything up to and including `close`, which must
/// appear before the end of the line. Returns the raw content in between.
fn delimited(cur: &mut Cursor<'_>, open: &str, close: &str) -> Option<String> {
    cur.advance_n(open.chars().count());
    let mut content = String::new();
    loop {
        if cur.ahead_is(close) {
            cur.advance_n(close.chars().count());
            return Some(content);
        }
        match cur.advance()? {
            '\n' => return None,
            ch => content.push(ch),
        }
    }
}
