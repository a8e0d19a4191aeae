//! # Block Parsing
//!
//! Speculative, backtracking block recognition driven character by character.
//!
//! ## Parsing Model
//!
//! 1. **Dispatch** (`dispatch`): the `Parser` iterator looks at the current
//!    character and tries every construct that character can open, in a
//!    fixed priority order
//!
//! 2. **Recognition** (`kinds`): each recognizer runs inside
//!    `Parser::attempt`, so a recognizer that gives up leaves the cursor
//!    exactly where it found it and only a warning behind
//!
//! 3. **Fallback** (`text`): when nothing matches, the plain-text consumer
//!    takes at least one character and stops before the next construct
//!
//! ## Modules
//!
//! - **`kinds`**: One module per construct, each owning its delimiters and recognizer
//! - **`dispatch`**: The `Iterator` impl selecting recognizers by trigger character
//! - **`text`**: Plain-text consumer with the forward-progress guarantee
//!
//! ## Key Invariants
//!
//! - Block constructs only open at the start of a line; nested lists may be indented
//! - Lists nest on an explicit stack up to `ListKind::MAX_DEPTH`; deeper
//!   openers are read as text
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod dispatch;
pub mod kinds;
pub mod text;
