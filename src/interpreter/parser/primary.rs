use std::iter::Peekable;

use crate::{
    ast::{Expr, Number},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
            utils::{check_depth, expect, nesting_too_deep, parse_comma_separated},
        },
    },
};

/// Parses a factor, the tightest-binding operand.
///
/// Supported forms:
/// - integer and float literals,
/// - `name` (variable reference),
/// - `name(arg, ...)` (function call, chosen when `(` immediately follows the
///   identifier),
/// - `( expression )`.
///
/// Grammar: `factor := number | identifier ("(" arg_list ")")? | "("
/// expression ")"`
///
/// Parenthesized expressions and argument lists are parsed one level deeper
/// than `depth`.
///
/// # Errors
/// - `ExpectedToken(")")` if a parenthesized expression or argument list is
///   not closed.
/// - `UnexpectedToken` if the token cannot start an operand.
/// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] levels.
///
/// # Example
/// ```
/// use tengri::{
///     ast::Expr,
///     interpreter::{lexer::tokenize, parser::primary::parse_factor},
/// };
///
/// let tokens = tokenize("square(4)").unwrap();
/// let expr = parse_factor(&mut tokens.iter().peekable(), 0).unwrap();
///
/// assert!(matches!(expr, Expr::FunctionCall { ref name, .. } if name == "square"));
/// ```
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };
    let line = token.line;

    match &token.kind {
        TokenKind::Integer(n) => Ok(Expr::Number { value: Number::Integer(*n),
                                                   line }),
        TokenKind::Float(x) => Ok(Expr::Number { value: Number::Float(*x),
                                                 line }),
        TokenKind::Identifier(name) => {
            if let Some(Token { kind: TokenKind::LParen, .. }) = tokens.peek() {
                check_depth(depth, token)?;
                tokens.next();
                let arguments = parse_comma_separated(tokens,
                                                      |tokens| parse_expression(tokens, depth + 1),
                                                      &TokenKind::RParen)?;
                let call = Expr::FunctionCall { name: name.clone(),
                                                arguments,
                                                line };
                if call.height() > MAX_NESTING_DEPTH {
                    return Err(nesting_too_deep(token));
                }
                return Ok(call);
            }
            Ok(Expr::Variable { name: name.clone(),
                                line })
        },
        TokenKind::LParen => {
            check_depth(depth, token)?;
            let expr = parse_expression(tokens, depth + 1)?;
            expect(tokens, &TokenKind::RParen, ")")?;
            Ok(expr)
        },
        kind => Err(ParseError::UnexpectedToken { token: kind.clone(),
                                                  line,
                                                  column: token.column }),
    }
}
