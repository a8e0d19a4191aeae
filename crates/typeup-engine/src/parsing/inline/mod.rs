//! # Inline Parsing
//!
//! Cursor-based inline style resolution over a flat span of text that a
//! block construct has already captured.
//!
//! ## Architecture
//!
//! A single left-to-right scan accumulates literal text and, at each
//! character, tries the inline constructs in precedence order:
//! - Code spans (raw zones, nothing is resolved inside them)
//! - Links (whose labels are resolved recursively)
//! - Emphasis (bold, italic, and exact mutual enclosure of the two)
//!
//! Unmatched openers are plain text; the resolver never reports failure.
//!
//! ## Modules
//!
//! - **`kinds`**: Delimiter ownership for code spans, links and emphasis
//! - **`parser`**: `resolve_inline()` entry point with `try_*` helpers
//!
//! ## Exact Enclosure
//!
//! `*_x_*` and `_*x*_` are bold+italic because the whole interior is one
//! instance of the other style. `*a _b* c_` is bold `a _b` followed by the
//! literal `c_`: partial overlaps are not resolved further.

pub mod kinds;
pub mod parser;

pub use parser::resolve_inline;
