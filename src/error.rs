/// Driver errors.
///
/// Raised when the input cannot be read or the output cannot be written. These
/// end the whole session, not just one line.
pub mod driver_error;
/// Lexing errors.
///
/// Raised by the lexer when the input contains something that cannot start a
/// token, or an integer literal that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Raised by the evaluator when the token stream does not follow the
/// `INTEGER '+' INTEGER` grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Raised while computing the result of a well-formed expression.
pub mod runtime_error;

pub use driver_error::DriverError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while evaluating one line.
///
/// Every variant is terminal: the evaluation that produced it has stopped and
/// cannot be resumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form an addition.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The addition itself failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
