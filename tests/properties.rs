use calc::{
    Error, evaluate,
    interpreter::lexer::{Lexer, Token},
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_sum_of_two_integers(a in 0u64..=u64::MAX / 2, b in 0u64..=u64::MAX / 2) {
        prop_assert_eq!(evaluate(&format!("{a}+{b}")).unwrap(), a + b);
    }
}

proptest! {
    #[test]
    fn prop_spaces_do_not_matter(a in 0u64..1_000_000,
                                 b in 0u64..1_000_000,
                                 w1 in " {0,4}",
                                 w2 in " {0,4}",
                                 w3 in " {0,4}",
                                 w4 in " {0,4}") {
        let line = format!("{w1}{a}{w2}+{w3}{b}{w4}");
        prop_assert_eq!(evaluate(&line).unwrap(), a + b);
    }
}

proptest! {
    #[test]
    fn prop_end_of_input_is_sticky(line in "[0-9 +]{0,18}", extra in 1usize..8) {
        let mut lexer = Lexer::new(&line);
        while lexer.next_token().unwrap() != Token::EndOfInput {}

        let cursor = lexer.cursor();
        prop_assert_eq!(cursor, line.len());
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token().unwrap(), Token::EndOfInput);
            prop_assert_eq!(lexer.cursor(), cursor);
        }
    }
}

proptest! {
    #[test]
    fn prop_other_characters_fail_to_lex(a in 0u64..100,
                                         b in 0u64..100,
                                         op in "[-*/%^a-z]") {
        let result = evaluate(&format!("{a}{op}{b}"));
        prop_assert!(matches!(result, Err(Error::Lex(_))));
    }
}
