use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest allowed nesting of parentheses, argument lists, function bodies
/// and expression trees.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole program.
///
/// Statements are parsed one after another until the `Eof` token. The first
/// syntax error aborts parsing; there is no recovery.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: The complete token stream, ending with `Eof`.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Example
/// ```
/// use tengri::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("— □ a : 10\nΛ □ b : a * 2").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        match iter.peek() {
            Some(Token { kind: TokenKind::Eof, .. }) => break,
            Some(_) => statements.push(parse_statement(&mut iter, 0)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    log::debug!("parsed {} top-level statements", statements.len());
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and descends through the precedence
/// hierarchy.
///
/// `depth` counts the parentheses, argument lists and function bodies that
/// enclose the expression.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, depth)
}
