use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::scalar::mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators call `eval_scalar`, power calls
    /// `eval_pow` and ordering and equality use `eval_comparison`. `&&` and
    /// `||` need their unevaluated operands and are rejected here; they go
    /// through `eval_short_circuit`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `index`: Token index of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Errors
    /// Returns [`RuntimeError::TypeError`](crate::error::RuntimeError::TypeError)
    /// for operands the operator does not take, and for `&&` and `||`.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::from(7);
    /// let right = Value::from(2);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::from(3));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       index: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, NotEqual, Or, Pow, Sub};

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar(op, left, right, index),
            Pow => Self::eval_pow(left, right, index),
            Less | Greater | Equal | NotEqual => Self::eval_comparison(op, left, right, index),
            And | Or => Err(mismatch(op, left, right, index)),
        }
    }
}
