use plc::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, scan},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).unwrap().iter().map(|t| t.kind).collect()
}

fn literals(source: &str) -> Vec<String> {
    scan(source).unwrap().into_iter().map(|t| t.literal).collect()
}

#[test]
fn declaration_tokens_and_offsets() {
    let tokens = scan("LET x = 1;").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Identifier, "LET", 0),
                    Token::new(TokenKind::Identifier, "x", 4),
                    Token::new(TokenKind::Operator, "=", 6),
                    Token::new(TokenKind::Integer, "1", 8),
                    Token::new(TokenKind::Operator, ";", 9),]);
}

#[test]
fn whitespace_only_input_has_no_tokens() {
    assert!(scan("").unwrap().is_empty());
    assert!(scan(" \t\r\n\x08").unwrap().is_empty());
}

#[test]
fn identifiers_may_contain_dashes_and_start_with_at() {
    assert_eq!(literals("is-empty @tmp a_b2"), ["is-empty", "@tmp", "a_b2"]);
    assert_eq!(kinds("is-empty @tmp a_b2"), [TokenKind::Identifier; 3]);
}

#[test]
fn leading_zero_ends_an_integer() {
    assert_eq!(literals("01"), ["0", "1"]);
    assert_eq!(kinds("01"), [TokenKind::Integer, TokenKind::Integer]);
    assert_eq!(literals("-0.5"), ["-0.5"]);
}

#[test]
fn decimals_need_a_fraction_digit() {
    assert_eq!(kinds("1."), [TokenKind::Integer, TokenKind::Operator]);
    assert_eq!(kinds("1.25"), [TokenKind::Decimal]);
    assert_eq!(literals("3.14.15"), ["3.14", ".", "15"]);
}

#[test]
fn sign_only_binds_when_adjacent() {
    assert_eq!(kinds("-5"), [TokenKind::Integer]);
    assert_eq!(kinds("- 5"), [TokenKind::Operator, TokenKind::Integer]);
    assert_eq!(literals("x - 1"), ["x", "-", "1"]);
}

#[test]
fn compound_operators() {
    assert_eq!(literals("a==b"), ["a", "==", "b"]);
    assert_eq!(literals("!= && || < > ="), ["!=", "&&", "||", "<", ">", "="]);
    assert_eq!(literals("&|!"), ["&", "|", "!"]);
    assert_eq!(kinds("&&"), [TokenKind::Operator]);
}

#[test]
fn character_and_string_literals_keep_their_quotes() {
    let tokens = scan(r#"'a' '\n' "hi\t" """#).unwrap();

    assert_eq!(tokens[0], Token::new(TokenKind::Character, "'a'", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Character, r"'\n'", 4));
    assert_eq!(tokens[2], Token::new(TokenKind::String, r#""hi\t""#, 9));
    assert_eq!(tokens[3], Token::new(TokenKind::String, r#""""#, 16));
}

#[test]
fn malformed_character_literals() {
    assert_eq!(scan("''"), Err(LexError::InvalidCharacter { index: 1 }));
    assert_eq!(scan("'ab'"), Err(LexError::InvalidCharacter { index: 2 }));
    assert_eq!(scan("'\n'"), Err(LexError::InvalidCharacter { index: 1 }));
    assert_eq!(scan(r"'\q'"), Err(LexError::InvalidEscape { index: 2 }));
}

#[test]
fn malformed_string_literals() {
    assert_eq!(scan("\"abc"), Err(LexError::UnterminatedString { index: 4 }));
    assert_eq!(scan("\"a\nb\""), Err(LexError::UnterminatedString { index: 2 }));
    assert_eq!(scan(r#""a\xb""#), Err(LexError::InvalidEscape { index: 3 }));
    assert_eq!(scan("\"a\u{7}\""), Err(LexError::InvalidStringCharacter { index: 2 }));
}

#[test]
fn offsets_count_characters_not_bytes() {
    let tokens = scan("'é' \"ü\" x").unwrap();
    let offsets: Vec<_> = tokens.iter().map(|t| t.index).collect();
    assert_eq!(offsets, [0, 4, 8]);

    assert_eq!(scan("\"é\u{7}\""), Err(LexError::InvalidStringCharacter { index: 2 }));
    assert_eq!(scan("'é'  'ab'"), Err(LexError::InvalidCharacter { index: 7 }));
}

#[test]
fn first_error_wins() {
    let error = scan("LET x = 'ab'; LET y = \"oops").unwrap_err();
    assert_eq!(error.index(), 10);
}

#[test]
fn rescanning_a_token_yields_the_same_token() {
    let source = r#"FUN main(): Integer DO LET s = "x\"y" + 'c'; RETURN -12 * 3.5 != x; END"#;

    for token in scan(source).unwrap() {
        let rescanned = scan(&token.literal).unwrap();
        assert_eq!(rescanned, vec![Token::new(token.kind, token.literal.clone(), 0)]);
    }
}
