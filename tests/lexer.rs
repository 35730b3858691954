use calc::{
    error::LexError,
    interpreter::lexer::{Lexer, Token, TokenKind, tokenize},
};

#[test]
fn digit_runs_are_munched_whole() {
    assert_eq!(tokenize("12+345").unwrap(),
               vec![Token::Integer(12), Token::Plus, Token::Integer(345), Token::EndOfInput]);
}

#[test]
fn spaces_are_skipped() {
    assert_eq!(tokenize("  7 +  8  ").unwrap(),
               vec![Token::Integer(7), Token::Plus, Token::Integer(8), Token::EndOfInput]);
}

#[test]
fn empty_and_blank_input_is_end_of_input() {
    assert_eq!(Lexer::new("").next_token(), Ok(Token::EndOfInput));
    assert_eq!(Lexer::new("    ").next_token(), Ok(Token::EndOfInput));
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("5 ");
    assert_eq!(lexer.next_token(), Ok(Token::Integer(5)));
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), Ok(Token::EndOfInput));
        assert_eq!(lexer.cursor(), 2);
    }
}

#[test]
fn cursor_advances_past_consumed_input() {
    let mut lexer = Lexer::new(" 12 + 3");
    assert_eq!(lexer.cursor(), 0);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor(), 3);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor(), 5);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor(), 7);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor(), 7);
}

#[test]
fn unrecognized_character_does_not_advance() {
    let mut lexer = Lexer::new("1 ? 2");
    assert_eq!(lexer.next_token(), Ok(Token::Integer(1)));

    let expected = LexError::UnrecognizedCharacter { character: '?',
                                                     position:  2, };
    assert_eq!(lexer.next_token(), Err(expected.clone()));
    assert_eq!(lexer.cursor(), 2);
    assert_eq!(lexer.next_token(), Err(expected));
    assert_eq!(lexer.cursor(), 2);
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let error = tokenize("1+é").unwrap_err();
    assert_eq!(error,
               LexError::UnrecognizedCharacter { character: 'é',
                                                 position:  2, });
    assert_eq!(error.position(), 2);
}

#[test]
fn oversized_literal_is_rejected() {
    let error = tokenize("1 + 99999999999999999999").unwrap_err();
    assert_eq!(error,
               LexError::LiteralTooLarge { literal:  "99999999999999999999".to_string(),
                                           position: 4, });
}

#[test]
fn iterator_stops_after_end_of_input() {
    let mut lexer = Lexer::new("+");
    assert_eq!(lexer.next(), Some(Ok(Token::Plus)));
    assert_eq!(lexer.next(), Some(Ok(Token::EndOfInput)));
    assert_eq!(lexer.next(), None);
}

#[test]
fn iterator_stops_after_first_error() {
    let items: Vec<_> = Lexer::new("1 x 2").collect();
    assert_eq!(items.len(), 2);
    assert!(items[1].is_err());
}

#[test]
fn tokens_carry_values_only_for_integers() {
    assert_eq!(Token::Integer(4).value(), Some(4));
    assert_eq!(Token::Plus.value(), None);
    assert_eq!(Token::EndOfInput.value(), None);

    assert_eq!(Token::Integer(4).kind(), TokenKind::Integer);
    assert_eq!(Token::Plus.kind(), TokenKind::Plus);
    assert_eq!(Token::EndOfInput.kind(), TokenKind::EndOfInput);
}

#[test]
fn tokens_display_their_kind() {
    assert_eq!(Token::Integer(42).to_string(), "INTEGER 42");
    assert_eq!(Token::Plus.to_string(), "PLUS");
    assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
}
