use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Raw lexemes recognized by `logos`.
///
/// This is the declarative half of the lexer. It only knows which character
/// runs form a lexeme; the [`Lexer`] wrapper turns it into the public
/// [`Token`] stream with its end-of-input and error semantics.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Maximal run of decimal digits, such as `7` or `345`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `+`
    #[token("+")]
    Plus,
    /// Spaces between tokens.
    #[regex(r" +", logos::skip)]
    Ignored,
}

/// Represents a lexical token of a calculator line.
///
/// Only integer literals carry a value, so the value can never be read from a
/// token that does not have one.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Non-negative integer literal, such as `42`.
    Integer(u64),
    /// `+`
    Plus,
    /// Marks that the input is exhausted.
    EndOfInput,
}

/// The kind of a [`Token`], without its payload.
///
/// Used by the evaluator to state which token it expects next and by
/// [`ParseError`](crate::error::ParseError) to report what it found instead.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// The addition operator.
    Plus,
    /// The end of the input.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::EndOfInput => TokenKind::EndOfInput,
        }
    }

    /// Returns the literal value, which is present only for integers.
    #[must_use]
    pub const fn value(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Plus | Self::EndOfInput => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "INTEGER {value}"),
            Self::Plus => write!(f, "PLUS"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Plus => write!(f, "PLUS"),
            Self::EndOfInput => write!(f, "EOF"),
        }
    }
}

/// Pull-based tokenizer over a single line of text.
///
/// The lexer borrows its input and keeps a single cursor into it. Every call to
/// [`Lexer::next_token`] skips spaces, then classifies what follows:
///
/// - a maximal run of digits becomes [`Token::Integer`];
/// - `+` becomes [`Token::Plus`];
/// - the end of the text becomes [`Token::EndOfInput`], and stays so on every
///   later call;
/// - anything else is a [`LexError`]. The cursor is left on the offending
///   character and every later call reports the same error.
///
/// # Examples
/// ```
/// use calc::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new(" 12 + 3");
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(12)));
/// assert_eq!(lexer.next_token(), Ok(Token::Plus));
/// assert_eq!(lexer.next_token(), Ok(Token::Integer(3)));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
/// ```
pub struct Lexer<'src> {
    source:  &'src str,
    inner:   logos::Lexer<'src, Lexeme>,
    cursor:  usize,
    halted:  Option<LexError>,
    drained: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Lexeme::lexer(source),
               cursor: 0,
               halted: None,
               drained: false }
    }

    /// Returns the byte offset of the next unconsumed character.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Produces the next token.
    ///
    /// # Errors
    /// - [`LexError::UnrecognizedCharacter`] if the next non-space character is
    ///   neither a digit nor `+`.
    /// - [`LexError::LiteralTooLarge`] if a digit run does not fit in a `u64`.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(error) = &self.halted {
            return Err(error.clone());
        }

        let token = loop {
            match self.inner.next() {
                None => {
                    self.cursor = self.source.len();
                    break Token::EndOfInput;
                },
                Some(Ok(Lexeme::Ignored)) => {},
                Some(Ok(Lexeme::Integer(value))) => {
                    self.cursor = self.inner.span().end;
                    break Token::Integer(value);
                },
                Some(Ok(Lexeme::Plus)) => {
                    self.cursor = self.inner.span().end;
                    break Token::Plus;
                },
                Some(Err(())) => {
                    let error = self.classify_error();
                    self.halted = Some(error.clone());
                    return Err(error);
                },
            }
        };

        trace!("token {token} at {}", self.cursor);
        Ok(token)
    }

    /// Builds the error for the lexeme `logos` just rejected and moves the
    /// cursor onto it.
    fn classify_error(&mut self) -> LexError {
        let span = self.inner.span();
        self.cursor = span.start;

        let slice = &self.source[span.start..];
        if slice.starts_with(|c: char| c.is_ascii_digit()) {
            let literal: String = slice.chars().take_while(char::is_ascii_digit).collect();
            return LexError::LiteralTooLarge { literal,
                                               position: span.start };
        }

        let character = slice.chars().next().unwrap_or_default();
        LexError::UnrecognizedCharacter { character,
                                          position: span.start }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to and including the first [`Token::EndOfInput`] or
    /// the first error, then stops.
    fn next(&mut self) -> Option<Self::Item> {
        if self.drained {
            return None;
        }

        let item = self.next_token();
        if matches!(item, Ok(Token::EndOfInput) | Err(_)) {
            self.drained = true;
        }
        Some(item)
    }
}

/// Collects every token of `source`, ending with [`Token::EndOfInput`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Examples
/// ```
/// use calc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1+23").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Integer(1), Token::Plus, Token::Integer(23), Token::EndOfInput]);
/// assert!(tokenize("1-2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(u64)`: The parsed value.
/// - `None`: If the literal does not fit in a `u64`.
fn parse_integer(lex: &logos::Lexer<Lexeme>) -> Option<u64> {
    lex.slice().parse().ok()
}
