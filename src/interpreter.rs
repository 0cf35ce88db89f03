/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions to values, executes
/// declarations against the environment, and manages one call frame per
/// active function call.
///
/// # Responsibilities
/// - Evaluates AST nodes in strict source order.
/// - Owns the global environment of a session.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens,
/// each one a rune, operator, separator, literal or identifier, tagged with
/// its line and column. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Skips whitespace and `//` comments.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` of statements using recursive descent.
///
/// # Responsibilities
/// - Converts tokens into declarations, function definitions, returns and
///   arithmetic expressions.
/// - Validates the grammar, failing on the first syntax error.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, floats and functions.
pub mod value;
