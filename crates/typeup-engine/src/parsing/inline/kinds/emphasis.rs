use crate::ast::Style;

/// The two emphasis styles, each with a short and a long spelling.
///
/// Short spellings use one delimiter and must close on the same line. Long
/// spellings double it and only open at the start of a span or after
/// whitespace, which keeps `http://` from opening an italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    pub const ALL: [Emphasis; 2] = [Emphasis::Bold, Emphasis::Italic];

    pub const fn short(self) -> char {
        match self {
            Emphasis::Bold => '*',
            Emphasis::Italic => '_',
        }
    }

    pub const fn long(self) -> &'static str {
        match self {
            Emphasis::Bold => "__",
            Emphasis::Italic => "//",
        }
    }

    pub const fn style(self) -> Style {
        match self {
            Emphasis::Bold => Style::Bold,
            Emphasis::Italic => Style::Italic,
        }
    }

    pub const fn other(self) -> Emphasis {
        match self {
            Emphasis::Bold => Emphasis::Italic,
            Emphasis::Italic => Emphasis::Bold,
        }
    }

    /// True if `c` can begin either spelling of any emphasis.
    pub fn may_open(c: char) -> bool {
        Self::ALL
            .iter()
            .any(|e| e.short() == c || e.long().starts_with(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_paired() {
        assert_eq!(Emphasis::Bold.other(), Emphasis::Italic);
        assert_eq!(Emphasis::Italic.other().style(), Style::Bold);
    }

    #[test]
    fn openers() {
        assert!(Emphasis::may_open('*'));
        assert!(Emphasis::may_open('_'));
        assert!(Emphasis::may_open('/'));
        assert!(!Emphasis::may_open('='));
    }
}
