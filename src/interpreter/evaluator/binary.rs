use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation between two values.
    ///
    /// Two integers stay integers: results are overflow checked and division
    /// truncates toward zero. If either operand is a float, both are promoted
    /// to `f64`. Division by zero is an error for both kinds. Functions are not
    /// valid operands.
    ///
    /// # Example
    /// ```
    /// use tengri::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let seven = Value::Integer(7);
    /// let two = Value::Integer(2);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Div, &seven, &two, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(3));
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Div, &seven, &Value::Float(2.0), 1);
    /// assert_eq!(result.unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Function(_), _) | (_, Value::Function(_)) => {
                Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                               left.kind_name(),
                                                               right.kind_name()),
                                              line })
            },
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
            _ => Self::eval_float_op(op, left.as_float(line)?, right.as_float(line)?, line),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b)
            },
        };
        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    fn eval_float_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        Ok(Value::Float(match op {
                            BinaryOperator::Add => a + b,
                            BinaryOperator::Sub => a - b,
                            BinaryOperator::Mul => a * b,
                            BinaryOperator::Div => {
                                if b == 0.0 {
                                    return Err(RuntimeError::DivisionByZero { line });
                                }
                                a / b
                            },
                        }))
    }
}
