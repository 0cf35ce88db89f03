/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that match no
/// token rule and numeric literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the AST from the
/// token stream: tokens that cannot start a statement or factor, and required
/// tokens that are missing.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined variables, division by zero, overflow, or nodes the selected
/// dialect cannot evaluate.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
