use crate::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::Delimiter,
    scope::ScopeContext,
    types::{EmphasisKind, InlineNode},
};

/// Deepest nesting any input can reach: each kind can be open only once.
pub const MAX_NESTING_DEPTH: usize = 4;

/// Parses inline emphasis into a sequence of [`InlineNode`]s.
///
/// Never fails. Unterminated delimiters are kept as text.
pub fn parse(content: &str) -> Vec<InlineNode> {
    parse_with_context(content, &ScopeContext::new())
}

/// Parses `content` as the interior of the scopes open in `context`.
///
/// A delimiter whose kind is already open in `context` would close an
/// enclosing span the caller owns, so here it is kept as text.
pub fn parse_with_context(content: &str, context: &ScopeContext) -> Vec<InlineNode> {
    InlineParser::default()
        .parse_with_context(content, context)
        .unwrap_or_else(|err| {
            log::debug!("falling back to plain text: {err}");
            let mut out = vec![];
            flush_text(&mut out, content);
            out
        })
}

/// Inline emphasis parser with a configurable nesting cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineParser {
    max_nesting_depth: usize,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl InlineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that rejects spans nested more than `max_nesting_depth` deep.
    /// A depth of 1 allows emphasis but no emphasis inside it.
    pub fn with_max_nesting_depth(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    /// Parses top-level inline content.
    ///
    /// # Errors
    /// [`ParseError::ExcessiveNesting`] if a matched span would sit deeper
    /// than the configured cap.
    pub fn parse(&self, content: &str) -> Result<Vec<InlineNode>, ParseError> {
        self.parse_with_context(content, &ScopeContext::new())
    }

    /// Parses `content` with the kinds in `context` already open.
    ///
    /// # Errors
    /// [`ParseError::ExcessiveNesting`], as for [`InlineParser::parse`].
    pub fn parse_with_context(
        &self,
        content: &str,
        context: &ScopeContext,
    ) -> Result<Vec<InlineNode>, ParseError> {
        let mut cur = Cursor::new(content);
        let mut out = vec![];
        let mut text_start = 0;

        while !cur.eof() {
            let Some(delim) = Delimiter::lex(&cur, context.innermost()) else {
                cur.bump();
                continue;
            };

            let start = cur.i;
            if let Some(node) = self.try_parse_span(&mut cur, delim, context)? {
                flush_text(&mut out, &content[text_start..start]);
                out.push(node);
                text_start = cur.i;
                continue;
            }

            log::trace!("unterminated {:?} at byte {start}", delim.as_str());
            cur.bump_n(delim.len());
        }

        flush_text(&mut out, &content[text_start..]);
        Ok(out)
    }

    /// Attempts to parse a whole span opening at the cursor.
    ///
    /// Returns `None` without moving the cursor when the delimiter closes an
    /// enclosing scope or has no matching closer. On success the cursor sits
    /// just past the closing delimiter.
    fn try_parse_span(
        &self,
        cur: &mut Cursor<'_>,
        delim: Delimiter,
        context: &ScopeContext,
    ) -> Result<Option<InlineNode>, ParseError> {
        let kind = delim.kind();
        let Some(inner) = context.enter(kind) else {
            return Ok(None);
        };

        let interior_start = cur.i + delim.len();
        let rest = &cur.s[interior_start..];
        let Some(end) = find_closer(rest, kind, context) else {
            return Ok(None);
        };

        if inner.depth() > self.max_nesting_depth {
            log::debug!(
                "{kind:?} at byte {} nests {} deep, limit is {}",
                cur.i,
                inner.depth(),
                self.max_nesting_depth
            );
            return Err(ParseError::ExcessiveNesting {
                depth: inner.depth(),
                limit: self.max_nesting_depth,
            });
        }

        let children = self.parse_with_context(&rest[..end], &inner)?;
        cur.bump_n(delim.len() + end + delim.len());

        Ok(Some(InlineNode::emphasis(kind, children)))
    }
}

/// Finds the byte offset in `s` of the delimiter closing a `target` span
/// opened just before `s`, with `context` open around that span.
///
/// Nested spans of other kinds are skipped whole, so their delimiters can't
/// close `target`. Returns `None` if `s` ends first or if a delimiter of a
/// kind in `context` shows up first: the enclosing span closes there, leaving
/// `target` unterminated.
///
/// This makes the same decision at every position that
/// [`InlineParser::parse_with_context`] makes when it later parses the interior.
fn find_closer(s: &str, target: EmphasisKind, context: &ScopeContext) -> Option<usize> {
    let inner = context.enter(target)?;
    let mut cur = Cursor::new(s);

    while !cur.eof() {
        let Some(delim) = Delimiter::lex(&cur, Some(target)) else {
            cur.bump();
            continue;
        };

        let kind = delim.kind();
        if kind == target {
            return Some(cur.i);
        }
        if context.contains(kind) {
            return None;
        }

        let start = cur.i;
        match find_closer(&s[start + delim.len()..], kind, &inner) {
            Some(end) => cur.bump_n(delim.len() + end + delim.len()),
            None => cur.bump_n(delim.len()),
        }
    }

    None
}

/// Appends `text` to the output, extending a trailing text node if present.
fn flush_text(out: &mut Vec<InlineNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(last)) = out.last_mut() {
        last.push_str(text);
    } else {
        out.push(InlineNode::Text(text.to_string()));
    }
}
