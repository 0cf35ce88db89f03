use std::iter::Peekable;

use crate::{
    ast::TypeRune,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes the next token and checks that it is of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: How the token is named in the error, e.g. `")"`.
///
/// # Errors
/// `ExpectedToken` carrying the token that was found instead.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: &TokenKind,
                                                    expected: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == *kind => Ok(token),
        Some(token) => Err(expected_token(expected, token)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Builds an `ExpectedToken` error positioned at `found`.
pub(in crate::interpreter::parser) fn expected_token(expected: &'static str,
                                                     found: &Token)
                                                     -> ParseError {
    ParseError::ExpectedToken { expected,
                                found: found.kind.clone(),
                                line: found.line,
                                column: found.column }
}

/// Fails with `NestingTooDeep` at `at` once `depth` reaches
/// [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn check_depth(depth: usize, at: &Token) -> ParseResult<()> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(nesting_too_deep(at));
    }
    Ok(())
}

/// Builds a `NestingTooDeep` error positioned at `at`.
pub(in crate::interpreter::parser) const fn nesting_too_deep(at: &Token) -> ParseError {
    ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                 line:   at.line,
                                 column: at.column, }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by argument lists and parameter lists. It repeatedly
/// calls `parse_item` to parse one element, expecting either a comma, to
/// continue the list, or the closing token, to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if anything other than
/// a comma or the closing token follows an item (`ExpectedToken` naming the
/// closing token).
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token>
{
    let mut items = Vec::new();
    if let Some(token) = tokens.peek()
       && token.kind == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma, .. }) => {},
            Some(token) if token.kind == *closing => break,
            Some(token) => return Err(expected_token(closing.glyph().unwrap_or("closing token"), token)),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// `ExpectedToken("identifier")` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name), .. }) => Ok(name.clone()),
        Some(token) => Err(expected_token("identifier", token)),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses one of the type annotation runes `□ ⊡ ∞ ◇ ≡`.
///
/// # Errors
/// `ExpectedToken("type rune")` if the next token is not a type rune.
pub(in crate::interpreter::parser) fn parse_type_rune<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<TypeRune>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    match token.kind {
        TokenKind::TypeInt => Ok(TypeRune::Int),
        TokenKind::TypeFloat => Ok(TypeRune::Float),
        TokenKind::TypeStr => Ok(TypeRune::Str),
        TokenKind::TypeChar => Ok(TypeRune::Char),
        TokenKind::TypeCollection => Ok(TypeRune::Collection),
        _ => Err(expected_token("type rune", token)),
    }
}
