use log::{debug, trace};

use crate::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result of evaluating, or of any step of an evaluation.
pub type EvalResult<T> = Result<T, Error>;

/// Evaluates the expression `INTEGER '+' INTEGER` over one line of text.
///
/// The evaluator pulls tokens from its [`Lexer`] on demand and holds exactly
/// one token of lookahead. The lookahead slot keeps the raw lexing result, so
/// a lexing failure is reported only once the grammar actually looks at that
/// token. Anything after the right operand is never looked at.
///
/// An evaluator computes a single expression: [`Evaluator::expr`] consumes it.
///
/// # Examples
/// ```
/// use calc::interpreter::evaluator::Evaluator;
///
/// assert_eq!(Evaluator::new("12 + 345").expr().unwrap(), 357);
/// assert!(Evaluator::new("+1").expr().is_err());
/// ```
pub struct Evaluator<'src> {
    lexer:   Lexer<'src>,
    current: Result<Token, LexError>,
}

impl<'src> Evaluator<'src> {
    /// Creates an evaluator over `source` and primes its lookahead.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Consumes the lookahead if it is of the `expected` kind.
    ///
    /// On success the consumed token is returned and the next token is pulled
    /// from the lexer into the lookahead slot.
    ///
    /// # Errors
    /// - [`Error::Lex`] if the lookahead could not be tokenized.
    /// - [`Error::Parse`] if the lookahead is of a different kind.
    fn eat(&mut self, expected: TokenKind) -> EvalResult<Token> {
        let token = self.current.clone()?;
        trace!("{} == {expected}", token.kind());

        if token.kind() != expected {
            return Err(ParseError::UnexpectedToken { expected,
                                                     found: token.kind(),
                                                     position: self.lexer.cursor() }.into());
        }

        self.current = self.lexer.next_token();
        Ok(token)
    }

    /// Consumes an integer literal and returns its value.
    fn integer(&mut self) -> EvalResult<u64> {
        match self.eat(TokenKind::Integer)? {
            Token::Integer(value) => Ok(value),
            // `eat` only returns tokens of the kind it was asked for.
            Token::Plus | Token::EndOfInput => unreachable!("eat(Integer) returned a non-integer"),
        }
    }

    /// Parses and computes the expression.
    ///
    /// Grammar: `expr := INTEGER '+' INTEGER`
    ///
    /// # Errors
    /// - [`Error::Lex`] if a token the grammar needs cannot be tokenized.
    /// - [`Error::Parse`] if the tokens are not `INTEGER '+' INTEGER`.
    /// - [`Error::Runtime`] if the sum overflows.
    pub fn expr(mut self) -> EvalResult<u64> {
        let left = self.integer()?;
        self.eat(TokenKind::Plus)?;
        let right = self.integer()?;

        left.checked_add(right)
            .ok_or_else(|| RuntimeError::Overflow { left, right }.into())
    }
}

/// Evaluates one line of text and returns the sum it describes.
///
/// A fresh [`Evaluator`] is built for every call, so nothing is shared between
/// lines and a failed line does not affect the next one.
///
/// # Errors
/// Returns an error if lexing, parsing or the addition fails.
///
/// # Examples
/// ```
/// use calc::evaluate;
///
/// assert_eq!(evaluate("1+2").unwrap(), 3);
/// assert_eq!(evaluate(" 1 + 23 ").unwrap(), 24);
/// assert!(evaluate("1-2").is_err());
/// ```
pub fn evaluate(source: &str) -> EvalResult<u64> {
    let result = Evaluator::new(source).expr();
    match &result {
        Ok(value) => debug!("{source:?} = {value}"),
        Err(e) => debug!("{source:?} failed: {e}"),
    }
    result
}
