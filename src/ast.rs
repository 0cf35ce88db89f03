use std::fmt;

/// A numeric literal as it appears in source code.
///
/// The lexer decides the variant: a literal is a `Float` if and only if a `.`
/// was consumed while scanning it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// The type annotation runes.
///
/// Annotations are recorded on declarations and parameters but never checked;
/// values only carry their runtime kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRune {
    /// `□`
    Int,
    /// `⊡`
    Float,
    /// `∞`
    Str,
    /// `◇`
    Char,
    /// `≡`
    Collection,
}

impl fmt::Display for TypeRune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Int => "□",
            Self::Float => "⊡",
            Self::Str => "∞",
            Self::Char => "◇",
            Self::Collection => "≡",
        };
        f.write_str(glyph)
    }
}

/// The arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// An expression node: everything that evaluates to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: Number,
        /// Line number in the source code.
        line:  usize,
    },
    /// An arithmetic operation on two operands.
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Read access to a variable or constant.
    Variable {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call, e.g. `square(4)`.
    FunctionCall {
        /// Name of the called function.
        name:      String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use tengri::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Variable { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// ## Example
    /// ```
    /// use tengri::{ast::Statement, parse};
    ///
    /// let program = parse("— □ x : 1 + 2 * f(3)").unwrap();
    /// let Statement::VarDecl { value, .. } = &program.statements[0] else { unreachable!() };
    ///
    /// assert_eq!(value.height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Number { .. } | Self::Variable { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Self::FunctionCall { arguments, .. } => {
                1 + arguments.iter().map(Self::height).max().unwrap_or(0)
            },
        }
    }

    /// The node kind of this expression.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Number { .. } => NodeKind::Number,
            Self::BinaryOp { .. } => NodeKind::BinOp,
            Self::Variable { .. } => NodeKind::VarAccess,
            Self::FunctionCall { .. } => NodeKind::FuncCall,
        }
    }
}

/// Renders the expression back in source syntax, fully parenthesizing every
/// binary operation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Variable { name, .. } => f.write_str(name),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
        }
    }
}

/// A single function parameter, e.g. `□ n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Declared type rune.
    pub type_rune: TypeRune,
    /// Parameter name.
    pub name:      String,
}

impl Param {
    /// The node kind of a parameter.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        NodeKind::Param
    }
}

/// A function definition introduced by `Π`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name.
    pub name:        String,
    /// Ordered parameter list.
    pub params:      Vec<Param>,
    /// Optional return type given after `→`.
    pub return_type: Option<TypeRune>,
    /// Body statements.
    pub body:        Vec<Statement>,
    /// Line of the `Π` rune.
    pub line:        usize,
}

/// A statement node: declarations, function definitions and returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `— <type> <name> : <expr>`
    VarDecl {
        /// Declared type rune.
        type_rune: TypeRune,
        /// Name being bound.
        name:      String,
        /// Initializer.
        value:     Expr,
        /// Line of the `—` rune.
        line:      usize,
    },
    /// `Λ <type> <name> : <expr>`
    ConstDecl {
        /// Declared type rune.
        type_rune: TypeRune,
        /// Name being bound.
        name:      String,
        /// Initializer.
        value:     Expr,
        /// Line of the `Λ` rune.
        line:      usize,
    },
    /// `Π <name> ( <params> ) [→ <type>] ( <statements> )`
    Function(FunctionDef),
    /// `→ <expr>`
    Return {
        /// The returned expression.
        value: Expr,
        /// Line of the `→` rune.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VarDecl { line, .. } | Self::ConstDecl { line, .. } | Self::Return { line, .. } => {
                *line
            },
            Self::Function(def) => def.line,
        }
    }

    /// The node kind of this statement.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::VarDecl { .. } => NodeKind::VarDecl,
            Self::ConstDecl { .. } => NodeKind::ConstDecl,
            Self::Function(_) => NodeKind::FuncDef,
            Self::Return { .. } => NodeKind::Return,
        }
    }
}

/// A parsed program: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The statements, executed strictly left to right.
    pub statements: Vec<Statement>,
}

/// Fieldless tags for every AST node variant.
///
/// Used where an error has to name a node without carrying it, most notably
/// [`RuntimeError::NoVisitorForNode`](crate::error::RuntimeError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Number,
    BinOp,
    VarAccess,
    VarDecl,
    ConstDecl,
    Param,
    FuncDef,
    FuncCall,
    Return,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::BinOp => "BinOp",
            Self::VarAccess => "VarAccess",
            Self::VarDecl => "VarDecl",
            Self::ConstDecl => "ConstDecl",
            Self::Param => "Param",
            Self::FuncDef => "FuncDef",
            Self::FuncCall => "FuncCall",
            Self::Return => "Return",
        };
        f.write_str(name)
    }
}
