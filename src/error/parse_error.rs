use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token of a different kind than the grammar requires.
    #[error("Error at position {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// Byte offset just past the offending token.
        position: usize,
    },
}
