//! # Document Tree
//!
//! Closed sum types for everything the parser can produce. Block-level
//! constructs are [`Node`]s, inline content is made of [`TextNode`]s, and list
//! items own their nested lists outright so nesting depth is unbounded without
//! any back-references.
//!
//! The tree is built once, bottom-up, during a single parse pass and is only
//! read afterwards (by the renderer in [`crate::render`]).

use std::collections::BTreeMap;

/// Emphasis applied to a [`Text`] fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// A leaf run of literal text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub style: Style,
    pub content: String,
}

impl Text {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(Style::Plain, content)
    }

    pub fn styled(style: Style, content: impl Into<String>) -> Self {
        Self {
            style,
            content: content.into(),
        }
    }
}

/// Ordered inline content. Used both as a paragraph and as a generic
/// inline container (heading titles, link labels, table cells).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub items: Vec<TextNode>,
}

impl TextBlock {
    pub fn new(items: Vec<TextNode>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text content without markup, fragments joined by a single space.
    pub fn plain(&self) -> String {
        self.items
            .iter()
            .map(TextNode::plain)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A hyperlink. The URL is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub label: Box<TextNode>,
    pub url: String,
}

/// Inline-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextNode {
    Text(Text),
    Block(TextBlock),
    Anchor(Anchor),
    /// Literal code; never style-resolved.
    InlineCode(String),
}

impl TextNode {
    pub fn plain(&self) -> String {
        match self {
            TextNode::Text(t) => t.content.clone(),
            TextNode::Block(b) => b.plain(),
            TextNode::Anchor(a) => a.label.plain(),
            TextNode::InlineCode(code) => code.clone(),
        }
    }
}

impl From<Text> for TextNode {
    fn from(t: Text) -> Self {
        TextNode::Text(t)
    }
}

impl From<TextBlock> for TextNode {
    fn from(b: TextBlock) -> Self {
        TextNode::Block(b)
    }
}

/// A list item is either inline content or a nested list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Text(TextBlock),
    Ordered(List),
    Unordered(List),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Always within `1..=6`.
    pub level: u8,
    pub title: TextNode,
}

/// A table. Rows are split independently, so their lengths may differ from
/// the header and from each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<TextNode>,
    pub rows: Vec<Vec<TextNode>>,
}

/// Fenced code block content, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub attrs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockQuote {
    pub text: TextNode,
}

/// Block-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    TextBlock(TextBlock),
    Heading(Heading),
    OrderedList(List),
    UnorderedList(List),
    Table(Table),
    Code(Code),
    Video(Video),
    Image(Image),
    BlockQuote(BlockQuote),
    ThemeBreak,
    LineBreak,
}

impl Node {
    /// Short name of the node variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::TextBlock(_) => "paragraph",
            Node::Heading(_) => "heading",
            Node::OrderedList(_) => "ordered list",
            Node::UnorderedList(_) => "unordered list",
            Node::Table(_) => "table",
            Node::Code(_) => "code",
            Node::Video(_) => "video",
            Node::Image(_) => "image",
            Node::BlockQuote(_) => "block quote",
            Node::ThemeBreak => "theme break",
            Node::LineBreak => "line break",
        }
    }
}

/// Result of a parse pass: top-level nodes plus document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
    pub meta: BTreeMap<String, String>,
}

impl Document {
    pub fn title(&self) -> Option<&str> {
        self.meta.get("title").map(String::as_str)
    }
}
