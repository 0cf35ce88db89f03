use crate::ast::NodeKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a name that has no binding.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The node parses, but the active dialect has no evaluation rule for it.
    NoVisitorForNode {
        /// The node that could not be evaluated.
        kind: NodeKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer could not be promoted to a float without losing precision.
    IntegerTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an incompatible kind for the operation.
    TypeError {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Called a name bound to something other than a function.
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function body finished without producing any value.
    MissingReturnValue {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested calls exceeded the configured depth.
    CallDepthExceeded {
        /// The configured maximum.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Expression evaluation nested deeper than the interpreter allows.
    ExpressionTooDeep {
        /// The maximum evaluation depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to re-declare a constant while constants are enforced.
    ConstantReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::NoVisitorForNode { kind, line } => write!(f,
                                                            "Error on line {line}: No evaluation rule for node {kind}."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::IntegerTooLarge { line } => write!(f,
                                                     "Error on line {line}: Integer is too large to be converted to a float."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::NotAFunction { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' expects {expected} argument(s), but {found} were given."),
            Self::MissingReturnValue { name, line } => write!(f,
                                                              "Error on line {line}: Function '{name}' finished without a value."),
            Self::CallDepthExceeded { limit, line } => write!(f,
                                                              "Error on line {line}: Maximum call depth of {limit} exceeded."),
            Self::ExpressionTooDeep { limit, line } => write!(f,
                                                              "Error on line {line}: Expression nesting exceeds the maximum depth of {limit}."),
            Self::ConstantReassignment { name, line } => write!(f,
                                                                "Error on line {line}: Constant '{name}' cannot be redeclared."),
        }
    }
}

impl std::error::Error for RuntimeError {}
