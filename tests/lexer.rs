use tengri::{
    ast::Number,
    error::LexError,
    interpreter::lexer::{Lexer, Literal, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Lexing {source:?} failed: {e}"))
                    .into_iter()
                    .map(|token| token.kind)
                    .collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

#[test]
fn every_glyph_maps_to_exactly_one_token() {
    use TokenKind::*;

    let table = [("Π", FuncDef),
                 ("↑", EntryPoint),
                 ("Y", If),
                 ("Q", True),
                 ("I", False),
                 ("↻", Loop),
                 ("→", Return),
                 ("⁞", Log),
                 ("—", Var),
                 ("Λ", Const),
                 ("□", TypeInt),
                 ("⊡", TypeFloat),
                 ("∞", TypeStr),
                 ("◇", TypeChar),
                 ("≡", TypeCollection),
                 ("+", Plus),
                 ("-", Minus),
                 ("*", Star),
                 ("/", Slash),
                 (":", Assign),
                 ("@", At),
                 ("#", Hash),
                 ("∈", In),
                 ("(", LParen),
                 (")", RParen),
                 ("[", LBracket),
                 ("]", RBracket),
                 (",", Comma),
                 ("==", EqualEqual),
                 ("<-", Push)];

    for (glyph, kind) in table {
        assert_eq!(kinds(glyph), vec![kind.clone(), Eof], "glyph {glyph}");
        assert_eq!(kind.glyph(), Some(glyph));
    }
}

#[test]
fn two_character_operators_win_over_prefixes() {
    assert_eq!(kinds("a == b"),
               vec![ident("a"), TokenKind::EqualEqual, ident("b"), TokenKind::Eof]);
    assert_eq!(kinds("xs <- 5"),
               vec![ident("xs"), TokenKind::Push, TokenKind::Integer(5), TokenKind::Eof]);
    assert_eq!(kinds("<--"), vec![TokenKind::Push, TokenKind::Minus, TokenKind::Eof]);
}

#[test]
fn lone_halves_of_two_character_operators_are_errors() {
    assert!(matches!(tokenize("a = b"),
                     Err(LexError::UnrecognizedCharacter { character: '=', .. })));
    assert!(matches!(tokenize("a < b"),
                     Err(LexError::UnrecognizedCharacter { character: '<', .. })));
}

#[test]
fn numbers_are_integers_unless_a_dot_was_consumed() {
    assert_eq!(kinds("42 2.5 7."),
               vec![TokenKind::Integer(42),
                    TokenKind::Float(2.5),
                    TokenKind::Float(7.0),
                    TokenKind::Eof]);
}

#[test]
fn integer_literals_that_overflow_are_errors() {
    assert_eq!(tokenize("— □ a : 99999999999999999999"),
               Err(LexError::NumberTooLarge { literal: "99999999999999999999".to_string(),
                                              line:    1,
                                              column:  9, }));
}

#[test]
fn identifiers_are_maximal_alphanumeric_runs() {
    assert_eq!(kinds("abc1 x9y total"),
               vec![ident("abc1"), ident("x9y"), ident("total"), TokenKind::Eof]);
    assert_eq!(kinds("aYI"), vec![ident("aYI"), TokenKind::Eof]);
    assert_eq!(kinds("değer"), vec![ident("değer"), TokenKind::Eof]);
}

#[test]
fn rune_letters_are_matched_before_identifiers() {
    assert_eq!(kinds("Index"), vec![TokenKind::False, ident("ndex"), TokenKind::Eof]);
    assert_eq!(kinds("Yes"), vec![TokenKind::If, ident("es"), TokenKind::Eof]);
    assert_eq!(kinds("Πf"), vec![TokenKind::FuncDef, ident("f"), TokenKind::Eof]);
}

#[test]
fn whitespace_and_comments_are_skipped() {
    assert_eq!(kinds("  a / b // c : d\n\t// whole line\n  e"),
               vec![ident("a"), TokenKind::Slash, ident("b"), ident("e"), TokenKind::Eof]);
    assert_eq!(kinds("// nothing but a comment"), vec![TokenKind::Eof]);
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn tokens_carry_line_and_column() {
    let tokens = tokenize("— □ a : 10\nΛ □ b : 5").unwrap();
    let positions = tokens.iter()
                          .map(|token| (token.line, token.column))
                          .collect::<Vec<_>>();

    assert_eq!(positions,
               vec![(1, 1),
                    (1, 3),
                    (1, 5),
                    (1, 7),
                    (1, 9),
                    (2, 1),
                    (2, 3),
                    (2, 5),
                    (2, 7),
                    (2, 9),
                    (2, 10)]);
}

#[test]
fn unrecognized_character_fails_without_partial_tokens() {
    assert_eq!(tokenize("— □ a : 10\n— □ b : a $ 2"),
               Err(LexError::UnrecognizedCharacter { character: '$',
                                                     line:      2,
                                                     column:    11, }));
}

#[test]
fn the_iterator_stops_after_the_first_error() {
    let items = Lexer::new("a $ b").collect::<Vec<_>>();

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn the_iterator_stops_after_eof() {
    let items = Lexer::new("a").collect::<Vec<_>>();

    assert_eq!(items.len(), 2);
    assert_eq!(items[1].as_ref().map(|t| t.kind.clone()), Ok(TokenKind::Eof));
}

#[test]
fn next_token_keeps_returning_eof() {
    let mut lexer = Lexer::new("7");

    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Integer(7));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn literal_values() {
    let tokens = tokenize("Λ total 2.5").unwrap();

    assert_eq!(tokens[0].literal(), Some(Literal::Text("Λ")));
    assert_eq!(tokens[1].literal(), Some(Literal::Text("total")));
    assert_eq!(tokens[2].literal(), Some(Literal::Number(Number::Float(2.5))));
    assert_eq!(tokens[3].literal(), None);
}

#[test]
fn push_literal_is_the_arrow() {
    let tokens = tokenize("xs <- 1").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Push);
    assert_eq!(tokens[1].literal(), Some(Literal::Text("←")));
    assert_eq!(TokenKind::Push.glyph(), Some("<-"));
}
