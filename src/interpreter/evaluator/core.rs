use std::io::Write;

use crate::{
    ast::{BinaryOperator, Case, Expr, Source, Statement},
    error::RuntimeError,
    interpreter::{
        environment::scope::Scope,
        evaluator::function::core::{Callable, builtins},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Returned` travels up through enclosing blocks and loops unchanged until
/// a function call consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// The statement ran to its end.
    Completed,
    /// A `RETURN` was executed with this value.
    Returned(Value),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope stack of live
/// variables and callable functions, and the writer `print` sends its output
/// to.
///
/// ## Usage
///
/// A `Context` runs one program with [`Context::execute`]. The root frame of
/// its scope holds the builtins, then the program's globals and functions.
pub struct Context<'a> {
    pub scope:  Scope<Value, Callable<'a>>,
    pub output: Box<dyn Write + 'a>,
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Context<'a> {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Creates a context that prints to `output`.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::{evaluator::Context, lexer::scan, parser::parse};
    ///
    /// let source = parse(&scan("FUN main(): Integer DO print(\"hi\"); RETURN 0; END").unwrap())
    ///     .unwrap();
    /// let mut buffer = Vec::new();
    /// Context::with_output(&mut buffer).execute(&source).unwrap();
    ///
    /// assert_eq!(buffer, b"hi\n");
    /// ```
    pub fn with_output(output: impl Write + 'a) -> Self {
        let mut scope = Scope::new();
        for (name, arity, function) in builtins() {
            scope.define_function(name, arity, Callable::Builtin(function));
        }

        Self { scope,
               output: Box::new(output) }
    }

    /// Runs a program.
    ///
    /// Globals are evaluated in order and bound in the root frame, every
    /// function is declared, then `main/0` is called.
    ///
    /// # Returns
    /// The value `main` returned, or `Nil` if it finished without `RETURN`.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`]; [`RuntimeError::MissingMain`] if
    /// there is no `main/0` to call.
    pub fn execute(&mut self, source: &'a Source) -> EvalResult<Value> {
        for global in &source.globals {
            let value = match &global.value {
                Some(value) => self.eval(value)?,
                None => Value::Nil,
            };
            self.scope.define_variable(&global.name, value);
        }

        for function in &source.functions {
            self.scope
                .define_function(&function.name, function.arity(), Callable::User(function));
        }

        let Some(&main) = self.scope.lookup_function("main", 0) else {
            return Err(RuntimeError::MissingMain);
        };
        self.call(main, Vec::new(), 0)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. `&&` and `||`
    /// evaluate their right operand only when the left one does not decide
    /// the result; every other operator evaluates both operands, left first.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Group { inner, .. } => self.eval(inner),
            Expr::Binary { op: op @ (BinaryOperator::And | BinaryOperator::Or),
                           left,
                           right,
                           index, } => self.eval_short_circuit(*op, left, right, *index),
            Expr::Binary { op,
                           left,
                           right,
                           index, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *index)
            },
            Expr::Access { name, offset, index } => match offset {
                Some(offset) => {
                    let position = self.eval(offset)?;
                    self.eval_element(name, &position, *index)
                },
                None => self.eval_variable(name, *index),
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 index, } => self.eval_function_call(name, arguments, *index),
            Expr::List { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
        }
    }

    /// Executes a single statement.
    ///
    /// `IF`, `WHILE` and `SWITCH` bodies run in a child frame that is removed
    /// when the body ends.
    ///
    /// # Returns
    /// [`Flow::Returned`] if a `RETURN` ran, else [`Flow::Completed`].
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
            },
            Statement::Declaration { name, value, .. } => {
                let value = match value {
                    Some(value) => self.eval(value)?,
                    None => Value::Nil,
                };
                self.scope.define_variable(name, value);
            },
            Statement::Assignment { receiver, value, .. } => self.exec_assignment(receiver, value)?,
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let branch = if self.eval(condition)?.as_bool(condition.index())? {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_scoped(branch);
            },
            Statement::Switch { condition, cases, .. } => return self.exec_switch(condition, cases),
            Statement::While { condition, body, .. } => {
                while self.eval(condition)?.as_bool(condition.index())? {
                    if let Flow::Returned(value) = self.exec_scoped(body)? {
                        return Ok(Flow::Returned(value));
                    }
                }
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(value) => self.eval(value)?,
                    None => Value::Nil,
                };
                return Ok(Flow::Returned(value));
            },
        }

        Ok(Flow::Completed)
    }

    /// Executes statements in order in the current frame, stopping at the
    /// first `RETURN`.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Returned(value) = self.exec_statement(statement)? {
                return Ok(Flow::Returned(value));
            }
        }
        Ok(Flow::Completed)
    }

    /// Executes statements in a new child frame.
    fn exec_scoped(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        self.scope.push();
        let flow = self.exec_block(statements);
        self.scope.pop();
        flow
    }

    /// Executes a `SWITCH`.
    ///
    /// The condition is evaluated once and compared by value against each
    /// case literal in order. The first match runs and ends the switch; the
    /// `DEFAULT` arm runs when nothing matches.
    fn exec_switch(&mut self, condition: &Expr, cases: &[Case]) -> EvalResult<Flow> {
        let selector = self.eval(condition)?;

        for case in cases {
            let matched = match &case.value {
                Some(value) => self.eval(value)? == selector,
                None => true,
            };
            if matched {
                return self.exec_scoped(&case.body);
            }
        }

        Ok(Flow::Completed)
    }
}

/// Runs a program with a fresh [`Context`] printing to standard output.
///
/// # Errors
/// Returns the first [`RuntimeError`].
pub fn execute(source: &Source) -> EvalResult<Value> {
    Context::new().execute(source)
}
