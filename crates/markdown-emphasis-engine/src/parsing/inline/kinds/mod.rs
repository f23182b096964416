//! # Inline Kinds
//!
//! Delimiter knowledge lives here, not in the parser. The parser asks
//! [`Delimiter::lex`] what sits under the cursor and never hardcodes `*`,
//! `~~` or `||` itself.
//!
//! ## Types
//!
//! - **`Delimiter`**: `Star`, `DoubleStar`, `DoubleTilde`, `DoublePipe`

pub mod delimiter;

pub use delimiter::Delimiter;
