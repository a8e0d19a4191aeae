/// Inline code span type with owned delimiter constants.
///
/// Code spans are raw zones: no emphasis or link parsing happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// Short form delimiter.
    pub const TICK: char = '`';
    /// Long form delimiter.
    pub const QUOTES: &'static str = "''";
    /// Escapes a backtick inside the short form.
    pub const ESCAPE: char = '\\';
}
