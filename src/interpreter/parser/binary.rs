use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{MAX_NESTING_DEPTH, ParseResult},
            primary::parse_factor,
            utils::nesting_too_deep,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `10 - 3 - 2`
/// parses as `(10 - 3) - 2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Enclosing nesting depth, passed down to the operands.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
///
/// # Errors
/// `NestingTooDeep` at the operator that would make the tree taller than
/// [`MAX_NESTING_DEPTH`].
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    let mut height = left.height();
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let token = *token;
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        height = height.max(right.height()) + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(nesting_too_deep(token));
        }
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := factor (("*" | "/") factor)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens, depth)?;
    let mut height = left.height();
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(&token.kind)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let token = *token;
        tokens.next();
        let right = parse_factor(tokens, depth)?;
        height = height.max(right.height()) + 1;
        if height > MAX_NESTING_DEPTH {
            return Err(nesting_too_deep(token));
        }
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+`, `-`, `*` or `/`.
///
/// # Example
/// ```
/// use tengri::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
