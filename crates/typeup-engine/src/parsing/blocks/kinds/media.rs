use std::collections::BTreeMap;

use crate::{
    ast::{Image, Node, Video},
    parsing::{Parser, cursor::Cursor, inline::kinds::Link},
};

/// Embedded media: images (`![...]`, `image[...]`, `img[...]`) and videos
/// (`video[...]`, `vid[...]`). The bracket content must close on its line.
pub struct Media;

impl Media {
    pub const IMAGE_SHORT: &'static str = "![";
    pub const IMAGE_LONG: [&'static str; 2] = ["image[", "img["];
    pub const VIDEO: [&'static str; 2] = ["video[", "vid["];
    pub const CLOSE: char = ']';

    fn image_opener(cur: &Cursor<'_>) -> Option<&'static str> {
        if !cur.is_start_of_line() {
            return None;
        }
        std::iter::once(Self::IMAGE_SHORT)
            .chain(Self::IMAGE_LONG)
            .find(|opener| cur.ahead_is(opener))
    }

    fn video_opener(cur: &Cursor<'_>) -> Option<&'static str> {
        if !cur.is_start_of_line() {
            return None;
        }
        Self::VIDEO.into_iter().find(|opener| cur.ahead_is(opener))
    }

    pub fn opens_image(cur: &Cursor<'_>) -> bool {
        Self::image_opener(cur).is_some()
    }

    pub fn opens_video(cur: &Cursor<'_>) -> bool {
        Self::video_opener(cur).is_some()
    }
}

impl Parser<'_> {
    pub(crate) fn try_image(&mut self) -> Option<Node> {
        let opener = Media::image_opener(&self.cursor)?;

        self.attempt(|p| {
            p.cursor.advance_n(opener.chars().count());
            let content = p.media_content("image")?;
            let content = content.trim();
            if content.is_empty() {
                p.warn("image missing content");
                return None;
            }
            let Some((alt, src)) = Link::split(content) else {
                p.warn("image missing source url");
                return None;
            };
            // `![src]` may omit the alt text; the long forms need both.
            if alt.is_empty() && opener != Media::IMAGE_SHORT {
                p.warn("image missing alt text");
                return None;
            }

            let attrs = BTreeMap::from([
                ("alt".to_string(), alt.to_string()),
                ("src".to_string(), src.to_string()),
            ]);
            p.cursor.skip_line_end();
            Some(Node::Image(Image { attrs }))
        })
    }

    pub(crate) fn try_video(&mut self) -> Option<Node> {
        let opener = Media::video_opener(&self.cursor)?;

        self.attempt(|p| {
            p.cursor.advance_n(opener.chars().count());
            let content = p.media_content("video")?;
            let source = content.trim();
            if source.is_empty() {
                p.warn("video missing source url");
                return None;
            }
            let video = Video {
                source: source.to_string(),
            };
            p.cursor.skip_line_end();
            Some(Node::Video(video))
        })
    }

    /// Reads up to and including the closing `]` on the current line.
    fn media_content(&mut self, what: &str) -> Option<String> {
        let mut content = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    self.warn(format!("unexpected end of input in {what}"));
                    return None;
                }
                Some('\n') => {
                    self.warn(format!("unexpected newline in {what}"));
                    return None;
                }
                Some(Media::CLOSE) => {
                    self.cursor.advance();
                    return Some(content);
                }
                Some(c) => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }
    }
}
