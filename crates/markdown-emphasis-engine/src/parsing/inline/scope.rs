use super::types::EmphasisKind;

/// The emphasis kinds open around the text being parsed, innermost last.
///
/// A kind is open at most once: markdown does not let a span reopen a scope
/// it is already inside, so a delimiter of an open kind always closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeContext {
    open: Vec<EmphasisKind>,
}

impl ScopeContext {
    /// The top-level context, with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a context with `kind` pushed as the innermost scope, or `None`
    /// if `kind` is already open.
    #[must_use]
    pub fn enter(&self, kind: EmphasisKind) -> Option<Self> {
        if self.contains(kind) {
            return None;
        }
        let mut open = self.open.clone();
        open.push(kind);
        Some(Self { open })
    }

    pub fn contains(&self, kind: EmphasisKind) -> bool {
        self.open.contains(&kind)
    }

    pub fn innermost(&self) -> Option<EmphasisKind> {
        self.open.last().copied()
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

impl TryFrom<&[EmphasisKind]> for ScopeContext {
    type Error = EmphasisKind;

    /// Builds a context from outermost to innermost. Fails with the first
    /// kind that appears twice.
    fn try_from(kinds: &[EmphasisKind]) -> Result<Self, Self::Error> {
        kinds
            .iter()
            .try_fold(Self::new(), |scope, &kind| scope.enter(kind).ok_or(kind))
    }
}
