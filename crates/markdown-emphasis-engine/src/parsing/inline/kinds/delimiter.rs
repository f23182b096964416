use crate::parsing::inline::{cursor::Cursor, types::EmphasisKind};

/// A span delimiter token, resolved once per scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `*`
    Star,
    /// `**`
    DoubleStar,
    /// `~~`
    DoubleTilde,
    /// `||`
    DoublePipe,
}

impl Delimiter {
    pub const STAR: u8 = b'*';
    pub const TILDE: u8 = b'~';
    pub const PIPE: u8 = b'|';

    /// The emphasis kind this delimiter opens and closes.
    pub fn kind(self) -> EmphasisKind {
        match self {
            Delimiter::Star => EmphasisKind::Italic,
            Delimiter::DoubleStar => EmphasisKind::Bold,
            Delimiter::DoubleTilde => EmphasisKind::Strikethrough,
            Delimiter::DoublePipe => EmphasisKind::Spoiler,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Star => "*",
            Delimiter::DoubleStar => "**",
            Delimiter::DoubleTilde => "~~",
            Delimiter::DoublePipe => "||",
        }
    }

    /// Length in bytes, which is also the length in characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        self.as_str().len()
    }

    /// Classifies the delimiter at the cursor, if any.
    ///
    /// A run of three or more stars is ambiguous. Inside an italic span the
    /// first star closes the italic so its parent can close on the rest;
    /// anywhere else the run opens or closes bold first.
    pub fn lex(cur: &Cursor<'_>, innermost: Option<EmphasisKind>) -> Option<Delimiter> {
        match cur.peek()? {
            Self::STAR => match cur.run_of(Self::STAR) {
                1 => Some(Delimiter::Star),
                2 => Some(Delimiter::DoubleStar),
                _ if innermost == Some(EmphasisKind::Italic) => Some(Delimiter::Star),
                _ => Some(Delimiter::DoubleStar),
            },
            Self::TILDE if cur.starts_with(b"~~") => Some(Delimiter::DoubleTilde),
            Self::PIPE if cur.starts_with(b"||") => Some(Delimiter::DoublePipe),
            _ => None,
        }
    }
}
