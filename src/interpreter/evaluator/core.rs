use crate::{
    ast::{Expr, NodeKind, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested function calls.
pub const MAX_CALL_DEPTH: usize = 256;

/// Limit on nested expression evaluations, counted across calls.
pub const MAX_EVAL_DEPTH: usize = 512;

/// How much of the language the interpreter evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Declarations and arithmetic only. Function definitions, calls and
    /// returns parse but fail with `NoVisitorForNode`.
    Baseline,
    /// Everything, including `Π` functions with one call frame per call.
    #[default]
    Functions,
}

/// Interpreter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// The evaluated language level.
    pub dialect:          Dialect,
    /// Reject re-declaring a name that was declared with `Λ` in the same
    /// scope.
    pub strict_constants: bool,
    /// Maximum number of nested calls.
    pub max_call_depth:   usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { dialect:          Dialect::default(),
               strict_constants: false,
               max_call_depth:   MAX_CALL_DEPTH, }
    }
}

/// The outcome of executing one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// Carry on with the next statement. Holds the statement's value, if any.
    Continue(Option<Value>),
    /// A `→` was executed; unwind to the enclosing call.
    Return(Value),
}

/// Stores the runtime evaluation state.
///
/// One `Interpreter` is one session: the global environment is created here
/// and lives as long as the interpreter. Each active function call adds one
/// frame to the call stack; a name is looked up in the innermost frame first,
/// then in the globals.
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) globals:    Environment,
    pub(crate) call_stack: Vec<Environment>,
    pub(crate) options:    Options,
    /// Number of `eval` calls currently active.
    depth:                 usize,
}

impl Interpreter {
    /// Creates an interpreter with default [`Options`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { globals: Environment::new(),
               call_stack: Vec::new(),
               options,
               depth: 0 }
    }

    /// The active configuration.
    ///
    /// # Example
    /// ```
    /// use tengri::interpreter::evaluator::core::{Dialect, Interpreter, Options};
    ///
    /// let options = Options { dialect: Dialect::Baseline,
    ///                         ..Options::default() };
    /// let interpreter = Interpreter::with_options(options);
    ///
    /// assert_eq!(interpreter.options().dialect, Dialect::Baseline);
    /// ```
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// The global environment: every top-level binding made so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.globals
    }

    /// Executes a program statement by statement.
    ///
    /// Returns the value of the last statement that produced one. A top-level
    /// `→` stops the program and its value becomes the result. Bindings made
    /// before a failing statement stay in the environment.
    ///
    /// # Example
    /// ```
    /// use tengri::{
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    ///     parse,
    /// };
    ///
    /// let program = parse("— □ a : 10\nΛ □ b : 5\n— □ c : a * (b + 2)").unwrap();
    /// let mut interpreter = Interpreter::new();
    /// let result = interpreter.interpret(&program).unwrap();
    ///
    /// assert_eq!(result, Some(Value::Integer(70)));
    /// assert_eq!(interpreter.environment().get("c"), Some(&Value::Integer(70)));
    /// ```
    pub fn interpret(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &program.statements {
            match self.execute(statement)? {
                Signal::Continue(value) => {
                    if value.is_some() {
                        result = value;
                    }
                },
                Signal::Return(value) => {
                    log::debug!("top-level return on line {}", statement.line_number());
                    return Ok(Some(value));
                },
            }
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The left operand of a binary operation is fully evaluated before the
    /// right one.
    ///
    /// # Errors
    /// Besides the errors of the individual nodes, `ExpressionTooDeep` once
    /// [`MAX_EVAL_DEPTH`] evaluations are nested, e.g. by recursion through
    /// deep expressions.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::ExpressionTooDeep { limit: MAX_EVAL_DEPTH,
                                                         line:  expr.line_number(), });
        }

        self.depth += 1;
        let result = self.eval_node(expr);
        self.depth -= 1;

        result
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok((*value).into()),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Variable { name, line } => {
                self.lookup(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => {
                self.require_functions(expr.kind(), *line)?;
                self.eval_function_call(name, arguments, *line)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Declarations bind their value in the current scope and yield it.
    /// Function definitions bind a `Value::Function`. Returns evaluate their
    /// expression and signal upward.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<Signal> {
        match statement {
            Statement::VarDecl { name, value, line, .. } => self.declare(name, value, false, *line),
            Statement::ConstDecl { name, value, line, .. } => self.declare(name, value, true, *line),
            Statement::Function(def) => {
                self.require_functions(statement.kind(), def.line)?;
                let function = Value::from(def.clone());
                self.bind(&def.name, function.clone(), false, def.line)?;
                Ok(Signal::Continue(Some(function)))
            },
            Statement::Return { value, line } => {
                self.require_functions(statement.kind(), *line)?;
                Ok(Signal::Return(self.eval(value)?))
            },
        }
    }

    /// Evaluates a declaration's initializer and binds it.
    fn declare(&mut self,
               name: &str,
               value: &Expr,
               constant: bool,
               line: usize)
               -> EvalResult<Signal> {
        let value = self.eval(value)?;
        self.bind(name, value.clone(), constant, line)?;
        Ok(Signal::Continue(Some(value)))
    }

    /// Binds `name` in the innermost scope.
    fn bind(&mut self, name: &str, value: Value, constant: bool, line: usize) -> EvalResult<()> {
        let strict = self.options.strict_constants;
        let scope = self.current_scope_mut();

        if strict && scope.binding(name).is_some_and(|binding| binding.constant) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string(),
                                                            line });
        }

        log::trace!("bind {name} = {value}");
        scope.set(name, value, constant);
        Ok(())
    }

    /// Resolves a name in the innermost call frame, then in the globals.
    pub(crate) fn lookup(&self, name: &str) -> Option<&Value> {
        self.call_stack
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.globals.get(name))
    }

    fn current_scope_mut(&mut self) -> &mut Environment {
        match self.call_stack.last_mut() {
            Some(frame) => frame,
            None => &mut self.globals,
        }
    }

    /// Fails with `NoVisitorForNode` when the baseline dialect is active.
    pub(crate) fn require_functions(&self, kind: NodeKind, line: usize) -> EvalResult<()> {
        match self.options.dialect {
            Dialect::Functions => Ok(()),
            Dialect::Baseline => Err(RuntimeError::NoVisitorForNode { kind, line }),
        }
    }
}
