use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The current token cannot begin any statement.
    UnexpectedStatementStart {
        /// The token encountered.
        token:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A required token is missing at this position.
    ExpectedToken {
        /// What was expected, e.g. `")"`, `":"` or `"identifier"`.
        expected: &'static str,
        /// The token found instead.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// The current token cannot begin an expression operand.
    UnexpectedToken {
        /// The token encountered.
        token:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Parentheses, calls, function bodies or operator chains nest too
    /// deeply.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The token stream ended without an end-of-input token.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedStatementStart { token, line, column } => write!(f,
                                                                             "Error on line {line}, column {column}: '{token}' cannot start a statement."),
            Self::ExpectedToken { expected,
                                  found,
                                  line,
                                  column, } => write!(f,
                                                      "Error on line {line}, column {column}: Expected {expected} but found '{found}'."),
            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unexpected token '{token}'.")
            },
            Self::NestingTooDeep { limit, line, column } => write!(f,
                                                                   "Error on line {line}, column {column}: Nesting exceeds the maximum depth of {limit}."),
            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
