//! # Inline Parsing
//!
//! Recursive-descent parsing of emphasis spans.
//!
//! ## Architecture
//!
//! A single scan walks the input with a [`cursor::Cursor`]. At each delimiter
//! the parser looks ahead for the matching closer, parses the interior with
//! a narrower [`scope::ScopeContext`], and skips the cursor past the whole
//! span. Everything else accumulates into text nodes.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, Emphasis) and `EmphasisKind`
//! - **`kinds`**: `Delimiter`, which owns the delimiter bytes and lexing
//! - **`scope`**: `ScopeContext`, the kinds open around the current text
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse()` and the configurable `InlineParser`
//!
//! ## Nesting
//!
//! A kind can't be opened inside itself. `*a *b* c*` is two italic spans
//! around a plain `b`, not an italic inside an italic.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod scope;
pub mod types;

pub use kinds::Delimiter;
pub use parser::{InlineParser, MAX_NESTING_DEPTH, parse, parse_with_context};
pub use scope::ScopeContext;
pub use types::{EmphasisKind, InlineNode};
