//! # markdown-emphasis-engine
//!
//! Parses inline markdown emphasis into a tree of typed nodes.
//!
//! ```
//! use markdown_emphasis_engine::{EmphasisKind, InlineNode, parse};
//!
//! let nodes = parse("a **bold** word");
//! assert_eq!(nodes[0], InlineNode::Text("a ".into()));
//! assert_eq!(nodes[1].kind(), Some(EmphasisKind::Bold));
//! assert_eq!(nodes[1].len(), 8);
//! ```
//!
//! Every node knows how many source characters it covers, delimiters
//! included, so the node lengths of any returned sequence add up to the
//! character count of the input.

pub mod error;
pub mod parsing;

// Re-export key types for easier usage
pub use error::ParseError;
pub use parsing::inline::{
    Delimiter, EmphasisKind, InlineNode, InlineParser, MAX_NESTING_DEPTH, ScopeContext, parse,
    parse_with_context,
};
