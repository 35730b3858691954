#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is not a space, a digit, or `+`.
    #[error("Error at position {position}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// An integer literal was too large to be represented.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits of the literal.
        literal:  String,
        /// Byte offset of the first digit in the input.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}
