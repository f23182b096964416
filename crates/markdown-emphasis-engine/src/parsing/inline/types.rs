use serde::Serialize;

use super::kinds::Delimiter;

/// The style an emphasis span applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmphasisKind {
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `~~strikethrough~~`
    Strikethrough,
    /// `||spoiler||`
    Spoiler,
}

impl EmphasisKind {
    /// The delimiter that opens and closes spans of this kind.
    pub fn delimiter(self) -> Delimiter {
        match self {
            EmphasisKind::Bold => Delimiter::DoubleStar,
            EmphasisKind::Italic => Delimiter::Star,
            EmphasisKind::Strikethrough => Delimiter::DoubleTilde,
            EmphasisKind::Spoiler => Delimiter::DoublePipe,
        }
    }
}

/// A parsed inline node.
///
/// Nodes own their text. Delimiter characters are never stored; they are
/// accounted for by the enclosing [`InlineNode::Emphasis`] `length`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// A run of literal characters. Adjacent literal characters always share
    /// one node.
    Text(String),
    /// A delimited span whose interior was parsed recursively.
    Emphasis {
        kind: EmphasisKind,
        /// Source characters consumed, both delimiters included.
        length: usize,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Builds an emphasis node, deriving `length` from the children.
    pub fn emphasis(kind: EmphasisKind, children: Vec<InlineNode>) -> Self {
        let length = children.iter().map(InlineNode::len).sum::<usize>()
            + 2 * kind.delimiter().len();
        InlineNode::Emphasis {
            kind,
            length,
            children,
        }
    }

    /// Number of source characters this node accounts for.
    ///
    /// For text this is the character count, not the byte count.
    pub fn len(&self) -> usize {
        match self {
            InlineNode::Text(text) => text.chars().count(),
            InlineNode::Emphasis { length, .. } => *length,
        }
    }

    /// Returns true for an empty text node. Emphasis nodes are never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> Option<EmphasisKind> {
        match self {
            InlineNode::Text(_) => None,
            InlineNode::Emphasis { kind, .. } => Some(*kind),
        }
    }

    /// Child nodes; always empty for text.
    pub fn children(&self) -> &[InlineNode] {
        match self {
            InlineNode::Text(_) => &[],
            InlineNode::Emphasis { children, .. } => children,
        }
    }
}
