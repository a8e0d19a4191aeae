//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The resolver in
//! [`super::parser`] asks these types for delimiters; it never hardcodes
//! `` ` ``, `[` or `*` itself.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `code` `` or `''code''`, a raw zone with no style resolution
//! - **`Link`**: `[label|url]` or `[words... url]`
//! - **`Emphasis`**: bold (`*x*`, `__x__`) and italic (`_x_`, `//x//`)

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
