use tengri::{
    ast::{Expr, FunctionDef, NodeKind, Number, Param, Program, Statement, TypeRune},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse_program},
    },
};

fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source).unwrap_or_else(|e| panic!("Lexing {source:?} failed: {e}"));
    parse_program(&tokens)
}

/// Parses a single declaration and renders its initializer.
fn initializer(source: &str) -> String {
    let program = parse(source).unwrap_or_else(|e| panic!("Parsing {source:?} failed: {e}"));
    match program.statements.as_slice() {
        [Statement::VarDecl { value, .. } | Statement::ConstDecl { value, .. }] => value.to_string(),
        other => panic!("Expected a single declaration, got {other:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(initializer("— □ x : 2 + 3 * 4"), "(2 + (3 * 4))");
    assert_eq!(initializer("— □ x : 10 - 3 - 2"), "((10 - 3) - 2)");
    assert_eq!(initializer("— □ x : 8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(initializer("— □ x : (2 + 3) * 4"), "((2 + 3) * 4)");
    assert_eq!(initializer("— ⊡ x : a * 2.5 - b"), "((a * 2.5) - b)");
}

#[test]
fn identifier_followed_by_paren_is_a_call() {
    assert_eq!(initializer("— □ x : f(1, y + 2)"), "f(1, (y + 2))");
    assert_eq!(initializer("— □ x : f()"), "f()");
    assert_eq!(initializer("— □ x : f"), "f");
}

#[test]
fn declaration_nodes() {
    let program = parse("— □ a : 10\nΛ ⊡ b : 1.5").unwrap();

    assert_eq!(program.statements,
               vec![Statement::VarDecl { type_rune: TypeRune::Int,
                                         name:      "a".to_string(),
                                         value:     Expr::Number { value: Number::Integer(10),
                                                                   line:  1, },
                                         line:      1, },
                    Statement::ConstDecl { type_rune: TypeRune::Float,
                                           name:      "b".to_string(),
                                           value:     Expr::Number { value: Number::Float(1.5),
                                                                     line:  2, },
                                           line:      2, }]);
}

#[test]
fn function_definition_with_params_and_return_type() {
    let program = parse("Π add(□ a, ⊡ b) → ⊡ (\n    → a + b\n)").unwrap();

    let [Statement::Function(FunctionDef { name,
                                           params,
                                           return_type,
                                           body,
                                           line, })] = program.statements.as_slice()
    else {
        panic!("Expected one function definition, got {program:?}");
    };

    assert_eq!(name, "add");
    assert_eq!(params,
               &vec![Param { type_rune: TypeRune::Int,
                             name:      "a".to_string(), },
                     Param { type_rune: TypeRune::Float,
                             name:      "b".to_string(), }]);
    assert_eq!(*return_type, Some(TypeRune::Float));
    assert_eq!(*line, 1);
    assert!(matches!(body.as_slice(), [Statement::Return { line: 2, .. }]));
}

#[test]
fn function_definition_without_params_or_return_type() {
    let program = parse("Π one() ( — □ x : 1 )").unwrap();

    match program.statements.as_slice() {
        [Statement::Function(def)] => {
            assert!(def.params.is_empty());
            assert_eq!(def.return_type, None);
            assert_eq!(def.body.len(), 1);
        },
        other => panic!("Expected one function definition, got {other:?}"),
    }
}

#[test]
fn empty_programs() {
    assert_eq!(parse(""), Ok(Program::default()));
    assert_eq!(parse("// only a comment\n"), Ok(Program::default()));
}

#[test]
fn missing_assign_operator() {
    assert_eq!(parse("— □ a 10"),
               Err(ParseError::ExpectedToken { expected: ":",
                                               found:    TokenKind::Integer(10),
                                               line:     1,
                                               column:   7, }));
}

#[test]
fn missing_type_rune_and_identifier() {
    assert!(matches!(parse("— a : 1"),
                     Err(ParseError::ExpectedToken { expected: "type rune", .. })));
    assert!(matches!(parse("— □ 5 : 1"),
                     Err(ParseError::ExpectedToken { expected: "identifier", .. })));
}

#[test]
fn unclosed_parenthesis() {
    assert_eq!(parse("— □ a : (1 + 2"),
               Err(ParseError::ExpectedToken { expected: ")",
                                               found:    TokenKind::Eof,
                                               line:     1,
                                               column:   15, }));
}

#[test]
fn unterminated_function_body() {
    assert!(matches!(parse("Π f() (\n— □ a : 1\n"),
                     Err(ParseError::ExpectedToken { expected: ")",
                                                     found: TokenKind::Eof,
                                                     .. })));
}

#[test]
fn argument_list_needs_commas() {
    assert_eq!(parse("— □ x : f(1 2)"),
               Err(ParseError::ExpectedToken { expected: ")",
                                               found:    TokenKind::Integer(2),
                                               line:     1,
                                               column:   13, }));
}

#[test]
fn statements_must_start_with_a_rune() {
    assert_eq!(parse("total"),
               Err(ParseError::UnexpectedStatementStart { token:  TokenKind::Identifier("total".to_string()),
                                                          line:   1,
                                                          column: 1, }));
    assert!(matches!(parse("— □ a : 1\n⁞ a"),
                     Err(ParseError::UnexpectedStatementStart { token: TokenKind::Log,
                                                                line: 2,
                                                                .. })));
}

#[test]
fn operands_cannot_start_with_an_operator() {
    // A newline is plain whitespace, so this continues the expression.
    assert_eq!(initializer("— □ a : 1\n+ 2"), "(1 + 2)");

    assert_eq!(parse("— □ a : * 2"),
               Err(ParseError::UnexpectedToken { token:  TokenKind::Star,
                                                 line:   1,
                                                 column: 9, }));
    assert!(matches!(parse("— □ a : 1\n)"),
                     Err(ParseError::UnexpectedStatementStart { token: TokenKind::RParen,
                                                                line: 2,
                                                                .. })));
}

#[test]
fn token_stream_without_eof() {
    assert_eq!(parse_program(&[]), Err(ParseError::UnexpectedEndOfInput));

    let truncated = [Token { kind:   TokenKind::Var,
                             line:   1,
                             column: 1, }];
    assert_eq!(parse_program(&truncated), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn error_messages_name_the_position() {
    let error = parse("— □ a 10").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1, column 7: Expected : but found '10'.");
}

#[test]
fn node_kinds() {
    let program = parse("Π f(□ n) ( → n )\n— □ a : f(1) + 2\nΛ □ b : b").unwrap();

    let kinds = program.statements.iter().map(Statement::kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![NodeKind::FuncDef, NodeKind::VarDecl, NodeKind::ConstDecl]);

    let [Statement::Function(def), Statement::VarDecl { value, .. }, Statement::ConstDecl { value: constant, .. }] =
        program.statements.as_slice()
    else {
        panic!("Unexpected statements: {program:?}");
    };
    assert_eq!(def.params[0].kind(), NodeKind::Param);
    assert_eq!(def.body[0].kind(), NodeKind::Return);
    assert_eq!(value.kind(), NodeKind::BinOp);
    assert_eq!(constant.kind(), NodeKind::VarAccess);

    let Expr::BinaryOp { left, right, .. } = value else {
        panic!("Expected a binary operation, got {value:?}");
    };
    assert_eq!(left.kind(), NodeKind::FuncCall);
    assert_eq!(right.kind(), NodeKind::Number);
    assert_eq!(NodeKind::Param.to_string(), "Param");
}

#[test]
fn operator_chains_up_to_the_limit_parse() {
    let terms = " + 1".repeat(MAX_NESTING_DEPTH - 1);
    let program = parse(&format!("— □ x : 1{terms}")).unwrap();

    match program.statements.as_slice() {
        [Statement::VarDecl { value, .. }] => assert_eq!(value.height(), MAX_NESTING_DEPTH),
        other => panic!("Expected a single declaration, got {other:?}"),
    }
}

#[test]
fn long_operator_chains_are_rejected() {
    let terms = " + 1".repeat(5_000);

    // The operator that would add the 257th level sits at column 4 * 256 + 7.
    assert_eq!(parse(&format!("— □ x : 1{terms}")),
               Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                line:   1,
                                                column: 1031, }));

    let factors = " * 2".repeat(5_000);
    assert!(matches!(parse(&format!("— □ x : 1{factors}")),
                     Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn deeply_nested_parentheses_are_rejected() {
    let open = "(".repeat(MAX_NESTING_DEPTH);
    let close = ")".repeat(MAX_NESTING_DEPTH);
    assert_eq!(initializer(&format!("— □ x : {open}1{close}")), "1");

    let open = "(".repeat(1_000);
    let close = ")".repeat(1_000);
    assert_eq!(parse(&format!("— □ x : {open}1{close}")),
               Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                line:   1,
                                                column: 9 + MAX_NESTING_DEPTH, }));

    let open = "(1 + ".repeat(1_000);
    let close = ")".repeat(1_000);
    assert!(matches!(parse(&format!("— □ x : {open}1{close}")),
                     Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn deeply_nested_calls_are_rejected() {
    let open = "f(".repeat(1_000);
    let close = ")".repeat(1_000);

    assert!(matches!(parse(&format!("— □ x : {open}1{close}")),
                     Err(ParseError::NestingTooDeep { line: 1, .. })));
}

#[test]
fn deeply_nested_function_bodies_are_rejected() {
    let open = "Π f() (\n".repeat(1_000);
    let close = ")".repeat(1_000);

    assert!(matches!(parse(&format!("{open}→ 1{close}")),
                     Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn nesting_error_message() {
    let error = parse(&format!("— □ x : 1{}", " + 1".repeat(300))).unwrap_err();

    assert_eq!(error.to_string(),
               "Error on line 1, column 1031: Nesting exceeds the maximum depth of 256.");
}
