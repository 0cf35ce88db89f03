#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character matched no token rule.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// An integer literal does not fit in 64 bits.
    NumberTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character,
                                          line,
                                          column, } => {
                write!(f,
                       "Error on line {line}, column {column}: Unrecognized character '{character}'.")
            },
            Self::NumberTooLarge { literal,
                                   line,
                                   column, } => write!(f,
                                                       "Error on line {line}, column {column}: Number {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
