//! # typeup-engine
//!
//! Parses typeup documents into a typed tree and renders that tree as HTML.
//!
//! ```
//! use typeup_engine::parse_document;
//!
//! let parsed = parse_document("=# Hello\nsome *bold* text");
//! assert_eq!(parsed.document.title(), Some("Hello"));
//! assert!(parsed.document.to_html().contains("<b>bold</b>"));
//! ```

pub mod ast;
pub mod diagnostics;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use ast::*;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use io::IoError;
pub use parsing::{ParsedDoc, Parser, parse_document};
pub use render::InlineHtml;
