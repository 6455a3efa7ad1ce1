#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// No operator, number or grouping matches at the current position.
    UnexpectedSyntax {
        /// The unconsumed input, starting at the offending character.
        remaining: String,
        /// Byte offset of the offending character.
        position:  usize,
    },
    /// More than one kind of token matches at the current position.
    AmbiguousSyntax {
        /// The unconsumed input, starting at the ambiguous position.
        remaining: String,
        /// Byte offset of the ambiguous position.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedSyntax { remaining, position } => {
                write!(f, "Error at byte {position}: Unexpected syntax found at: {remaining}")
            },
            Self::AmbiguousSyntax { remaining, position } => {
                write!(f, "Error at byte {position}: Ambiguous syntax found at: {remaining}")
            },
        }
    }
}

impl std::error::Error for LexError {}
