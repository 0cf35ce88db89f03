use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter, Signal},
            environment::Environment,
        },
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a function call.
    ///
    /// The callee is resolved like any variable. Its parameter count must
    /// match the number of arguments. Arguments are evaluated left to right in
    /// the caller's scope, then bound as variables in a fresh frame pushed on
    /// the call stack. The frame is popped when the call ends, whether it
    /// succeeds or not.
    ///
    /// # Errors
    /// - `UndefinedVariable` or `NotAFunction` for a bad callee.
    /// - `ArgumentCountMismatch` for a wrong number of arguments.
    /// - `CallDepthExceeded` when the call stack is full.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let function = match self.lookup(name) {
            Some(Value::Function(def)) => Rc::clone(def),
            Some(_) => {
                return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                        line });
            },
            None => {
                return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line });
            },
        };

        if arguments.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: arguments.len(),
                                                             line });
        }

        if self.call_stack.len() >= self.options.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { limit: self.options.max_call_depth,
                                                         line });
        }

        let arg_vals = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        let mut frame = Environment::new();
        for (param, value) in function.params.iter().zip(arg_vals) {
            log::trace!("{} {} = {value}", param.kind(), param.name);
            frame.set(&param.name, value, false);
        }

        log::debug!("call {name} at depth {}", self.call_stack.len() + 1);
        self.call_stack.push(frame);
        let result = self.run_body(&function);
        self.call_stack.pop();

        result
    }

    /// Executes a function body until a `→` or its last statement.
    ///
    /// Without a `→`, the value of the last statement that produced one is the
    /// result.
    fn run_body(&mut self, function: &FunctionDef) -> EvalResult<Value> {
        let mut last_value = None;

        for statement in &function.body {
            match self.execute(statement)? {
                Signal::Return(value) => return Ok(value),
                Signal::Continue(value) => {
                    if value.is_some() {
                        last_value = value;
                    }
                },
            }
        }

        last_value.ok_or_else(|| RuntimeError::MissingReturnValue { name: function.name.clone(),
                                                                   line: function.line, })
    }
}
