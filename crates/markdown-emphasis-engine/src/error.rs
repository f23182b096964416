#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Emphasis nested {depth} deep exceeds the limit of {limit}")]
    ExcessiveNesting { depth: usize, limit: usize },
}
