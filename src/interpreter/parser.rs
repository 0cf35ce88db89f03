/// Parser entry points.
///
/// Contains the program-level loop and the expression entry point.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence tiers: `+`/`-` expressions over `*`/`/`
/// terms, both left-associative.
pub mod binary;

/// Operand parsing.
///
/// Parses factors: numeric literals, variable references, function calls and
/// parenthesized sub-expressions.
pub mod primary;

/// Statement parsing.
///
/// Implements declarations, function definitions and return statements.
pub mod statement;

/// Shared parsing helpers.
///
/// Token expectations, identifiers, type runes and comma-separated lists.
pub mod utils;
