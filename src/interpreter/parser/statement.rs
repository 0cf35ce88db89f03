use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Param, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{
                check_depth, expect, expected_token, parse_comma_separated, parse_identifier,
                parse_type_rune,
            },
        },
    },
};

/// Parses a single statement.
///
/// The first token decides the production:
/// - `—` or `Λ`: a variable or constant declaration,
/// - `Π`: a function definition,
/// - `→`: a return statement.
///
/// `depth` is the number of function bodies around the statement.
///
/// # Errors
/// `UnexpectedStatementStart` carrying the offending token if it starts none
/// of the above.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match &token.kind {
        TokenKind::Var | TokenKind::Const => parse_declaration(tokens, depth),
        TokenKind::FuncDef => parse_function_definition(tokens, depth),
        TokenKind::Return => parse_return(tokens, depth),
        kind => Err(ParseError::UnexpectedStatementStart { token:  kind.clone(),
                                                           line:   token.line,
                                                           column: token.column, }),
    }
}

/// Parses a declaration of the form `(— | Λ) <type> <identifier> : <expression>`.
///
/// # Errors
/// - `ExpectedToken("type rune")` or `ExpectedToken("identifier")` for a
///   malformed head.
/// - `ExpectedToken(":")` if the assignment operator does not immediately
///   follow the identifier.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let Some(rune) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let line = rune.line;

    let type_rune = parse_type_rune(tokens)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &TokenKind::Assign, ":")?;
    let value = parse_expression(tokens, depth)?;

    if rune.kind == TokenKind::Const {
        Ok(Statement::ConstDecl { type_rune,
                                  name,
                                  value,
                                  line })
    } else {
        Ok(Statement::VarDecl { type_rune,
                                name,
                                value,
                                line })
    }
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     Π <name> ( <type> <param>, ... ) [→ <type>] ( <statement>* )
/// ```
/// Parameter lists and bodies are delimited by parentheses. The body is read
/// statement by statement until the closing `)` at its own level.
///
/// # Errors
/// - `ExpectedToken` for a missing `(`, `)`, type rune or identifier.
/// - `NestingTooDeep` for bodies nested past the depth limit.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                    depth: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, &TokenKind::FuncDef, "Π")?.line;
    let name = parse_identifier(tokens)?;

    expect(tokens, &TokenKind::LParen, "(")?;
    let params = parse_comma_separated(tokens, parse_param, &TokenKind::RParen)?;

    let return_type = if let Some(Token { kind: TokenKind::Return, .. }) = tokens.peek() {
        tokens.next();
        Some(parse_type_rune(tokens)?)
    } else {
        None
    };

    let body = parse_body(tokens, depth)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         return_type,
                                         body,
                                         line }))
}

/// Parses one parameter: `<type> <identifier>`.
fn parse_param<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Param>
    where I: Iterator<Item = &'a Token>
{
    let type_rune = parse_type_rune(tokens)?;
    let name = parse_identifier(tokens)?;
    Ok(Param { type_rune, name })
}

/// Parses a parenthesized statement list: `( <statement>* )`.
fn parse_body<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, &TokenKind::LParen, "(")?;
    check_depth(depth, open)?;

    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            Some(Token { kind: TokenKind::RParen, .. }) => {
                tokens.next();
                break;
            },
            Some(token) if token.kind == TokenKind::Eof => return Err(expected_token(")", token)),
            Some(_) => body.push(parse_statement(tokens, depth + 1)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(body)
}

/// Parses a return statement: `→ <expression>`.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let line = expect(tokens, &TokenKind::Return, "→")?.line;
    let value = parse_expression(tokens, depth)?;
    Ok(Statement::Return { value, line })
}
