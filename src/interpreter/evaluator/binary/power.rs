use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::bigint_to_u32,
};

impl Context<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Both operands must be integers. The exponent must be non-negative and
    /// fit in 32 bits; the result is exact.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `index`: Token index of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ^ exponent`.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::{evaluator::Context, value::core::Value};
    ///
    /// let result = Context::eval_pow(&2.into(), &100.into(), 1).unwrap();
    /// assert_eq!(result.to_string(), "1267650600228229401496703205376");
    ///
    /// assert!(Context::eval_pow(&2.into(), &(-1).into(), 1).is_err());
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, index: usize) -> EvalResult<Value> {
        match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) => {
                let e = bigint_to_u32(e, RuntimeError::InvalidExponent { index })?;
                Ok(Value::Integer(b.pow(e)))
            },
            _ => Err(mismatch(BinaryOperator::Pow, base, exponent, index)),
        }
    }
}
