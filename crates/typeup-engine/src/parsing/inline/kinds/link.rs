/// Link type with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
    pub const SEPARATOR: char = '|';

    /// Splits bracket content into `(label, url)`.
    ///
    /// `label|url` splits on the last separator. Otherwise the last
    /// whitespace-separated word is the URL and the words before it the label;
    /// a single word is both. Returns `None` when no URL can be found.
    pub fn split(inner: &str) -> Option<(&str, &str)> {
        let inner = inner.trim();
        if let Some((label, url)) = inner.rsplit_once(Self::SEPARATOR) {
            let url = url.trim();
            return (!url.is_empty()).then(|| (label.trim(), url));
        }
        let url = inner.split_whitespace().last()?;
        let label = inner[..inner.len() - url.len()].trim_end();
        Some((label, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_last_separator() {
        assert_eq!(Link::split("a|b | http://x"), Some(("a|b", "http://x")));
    }

    #[test]
    fn split_on_words() {
        assert_eq!(
            Link::split(" the docs  http://x "),
            Some(("the docs", "http://x"))
        );
    }

    #[test]
    fn single_word_is_its_own_label() {
        assert_eq!(Link::split("http://x"), Some(("", "http://x")));
    }

    #[test]
    fn empty_url_is_rejected() {
        assert_eq!(Link::split("label|  "), None);
        assert_eq!(Link::split("   "), None);
    }
}
