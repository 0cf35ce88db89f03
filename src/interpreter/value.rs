use std::{fmt, rc::Rc};

use crate::{
    ast::{FunctionDef, Number},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// Values only carry their runtime kind; type runes on declarations are not
/// checked against it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A function bound by `Π`. Shared, since every call reads the same
    /// definition.
    Function(Rc<FunctionDef>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(v) => Self::Integer(v),
            Number::Float(v) => Self::Float(v),
        }
    }
}

impl From<FunctionDef> for Value {
    fn from(def: FunctionDef) -> Self {
        Self::Function(Rc::new(def))
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// For integers, conversion fails if the value is too large to be
    /// represented as `f64` exactly.
    ///
    /// # Example
    /// ```
    /// use tengri::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(1).unwrap(), 10.0);
    /// assert_eq!(Value::Float(2.5).as_float(1).unwrap(), 2.5);
    /// ```
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::IntegerTooLarge { line }),
            Self::Function(def) => {
                Err(RuntimeError::TypeError { details: format!("function '{}' is not a number",
                                                               def.name),
                                              line })
            },
        }
    }

    /// A short name of the value's runtime kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Function(_) => "function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Function(def) => {
                write!(f, "Π {}(", def.name)?;
                for (i, param) in def.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", param.type_rune, param.name)?;
                }
                f.write_str(")")?;
                if let Some(return_type) = def.return_type {
                    write!(f, " → {return_type}")?;
                }
                Ok(())
            },
        }
    }
}
