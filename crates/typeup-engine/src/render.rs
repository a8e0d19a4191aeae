//! # HTML Rendering
//!
//! Pure tree-to-HTML stringification. Every node has a block form
//! ([`Node::html`]); nodes that may be embedded in other content also
//! implement [`InlineHtml`], which renders without the outer block wrapper
//! (`inline_html`) or in the compact form used inside list items and table
//! cells (`list_html`).
//!
//! Literal text is escaped exactly once, at the point of emission. Tags
//! produced here are never escaped.

use std::borrow::Cow;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::ast::{
    Anchor, BlockQuote, Code, Document, Heading, Image, List, ListItem, Node, Style, Table, Text,
    TextBlock, TextNode, Video,
};

/// Rendering for nodes that can appear inside other content.
pub trait InlineHtml {
    /// Inline form: no block wrapper, fragments separated by newlines.
    fn inline_html(&self) -> String;

    /// Compact form for list items and table cells.
    fn list_html(&self) -> String {
        self.inline_html()
    }
}

fn escape(s: &str) -> Cow<'_, str> {
    encode_text(s)
}

fn attr(s: &str) -> Cow<'_, str> {
    encode_double_quoted_attribute(s)
}

impl InlineHtml for Text {
    fn inline_html(&self) -> String {
        let text = escape(&self.content);
        match self.style {
            Style::Plain => text.into_owned(),
            Style::Bold => format!("<b>{text}</b>"),
            Style::Italic => format!("<i>{text}</i>"),
            Style::BoldItalic => format!("<b><i>{text}</i></b>"),
        }
    }
}

impl InlineHtml for TextBlock {
    fn inline_html(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            let html = item.inline_html();
            let html = html.trim();
            if html.is_empty() {
                continue;
            }
            out.push_str(html);
            out.push('\n');
        }
        out
    }

    fn list_html(&self) -> String {
        self.items
            .iter()
            .map(TextNode::list_html)
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl InlineHtml for Anchor {
    fn inline_html(&self) -> String {
        format!(
            "<a href=\"{}\">{}</a>",
            attr(&self.url),
            self.label.list_html()
        )
    }
}

impl InlineHtml for TextNode {
    fn inline_html(&self) -> String {
        match self {
            TextNode::Text(t) => t.inline_html(),
            TextNode::Block(b) => b.inline_html(),
            TextNode::Anchor(a) => a.inline_html(),
            TextNode::InlineCode(code) => format!("<code>{}</code>", escape(code)),
        }
    }

    fn list_html(&self) -> String {
        match self {
            TextNode::Block(b) => b.list_html(),
            other => other.inline_html(),
        }
    }
}

impl InlineHtml for Code {
    fn inline_html(&self) -> String {
        format!("<pre><code>{}</code></pre>", escape(&self.text))
    }
}

impl InlineHtml for BlockQuote {
    fn inline_html(&self) -> String {
        format!("<blockquote>{}</blockquote>", self.text.inline_html().trim_end())
    }

    fn list_html(&self) -> String {
        format!("<blockquote>{}</blockquote>", self.text.list_html())
    }
}

impl ListItem {
    pub fn list_html(&self) -> String {
        match self {
            ListItem::Text(text) => text.list_html(),
            ListItem::Ordered(list) => list.html("ol"),
            ListItem::Unordered(list) => list.html("ul"),
        }
    }
}

impl List {
    fn html(&self, tag: &str) -> String {
        let mut out = format!("<{tag}>\n");
        for item in &self.items {
            out.push_str("<li>");
            out.push_str(&item.list_html());
            out.push_str("</li>\n");
        }
        out.push_str(&format!("</{tag}>"));
        out
    }
}

impl Heading {
    pub fn html(&self) -> String {
        format!(
            "<h{level}>{}</h{level}>",
            self.title.list_html(),
            level = self.level
        )
    }
}

impl Table {
    pub fn html(&self) -> String {
        let mut out = String::from("<table style=\"width:100%\">\n<tr>\n");
        for cell in &self.headers {
            out.push_str(&format!("<th>{}</th>\n", cell.list_html()));
        }
        out.push_str("</tr>\n");
        for row in &self.rows {
            out.push_str("<tr>\n");
            for cell in row {
                out.push_str(&format!("<td>{}</td>\n", cell.list_html()));
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</table>");
        out
    }
}

impl Image {
    pub fn html(&self) -> String {
        let mut out = String::from("<img");
        for (key, value) in &self.attrs {
            out.push_str(&format!(" {key}=\"{}\"", attr(value)));
        }
        out.push('>');
        out
    }
}

impl Video {
    pub fn html(&self) -> String {
        format!("<video><source src=\"{}\"></video>", attr(&self.source))
    }
}

impl Node {
    /// Block form of the node.
    pub fn html(&self) -> String {
        match self {
            Node::TextBlock(text) => format!("<p>\n{}</p>", text.inline_html()),
            Node::Heading(heading) => heading.html(),
            Node::OrderedList(list) => list.html("ol"),
            Node::UnorderedList(list) => list.html("ul"),
            Node::Table(table) => table.html(),
            Node::Code(code) => code.inline_html(),
            Node::Video(video) => video.html(),
            Node::Image(image) => image.html(),
            Node::BlockQuote(quote) => quote.inline_html(),
            Node::ThemeBreak => "<hr>".to_string(),
            Node::LineBreak => "<br>".to_string(),
        }
    }
}

impl Document {
    /// One rendered fragment per top-level node, in document order.
    pub fn fragments(&self) -> Vec<String> {
        self.nodes.iter().map(Node::html).collect()
    }

    /// The complete HTML page.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<html>\n");
        if let Some(title) = self.title() {
            out.push_str(&format!("<head><title>{}</title></head>\n", escape(title)));
        }
        out.push_str("<body>\n");
        for fragment in self.fragments() {
            out.push_str(&fragment);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}
