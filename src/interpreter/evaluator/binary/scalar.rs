use num_traits::Zero;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// `+` concatenates the textual forms of both operands when either is a
    /// string. Otherwise both operands must be integers or both decimals.
    /// Integer division truncates toward zero. Dividing by an exact zero
    /// fails for both kinds instead of producing an infinity.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_scalar(BinaryOperator::Add, &"a".into(), &1.into(), 0);
    /// assert_eq!(joined.unwrap(), Value::from("a1"));
    ///
    /// let mixed = Context::eval_scalar(BinaryOperator::Mul, &2.into(), &2.0.into(), 0);
    /// assert!(mixed.is_err());
    /// ```
    pub fn eval_scalar(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       index: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Decimal, Integer};

        match (op, left, right) {
            (Add, Value::String(_), _) | (Add, _, Value::String(_)) => {
                Ok(Value::String(format!("{left}{right}")))
            },
            (Div, Integer(_), Integer(r)) if r.is_zero() => {
                Err(RuntimeError::DivisionByZero { index })
            },
            (Div, Decimal(_), Decimal(r)) if r.0 == 0.0 => {
                Err(RuntimeError::DivisionByZero { index })
            },
            (_, Integer(l), Integer(r)) => Ok(Integer(match op {
                                             Add => l + r,
                                             Sub => l - r,
                                             Mul => l * r,
                                             _ => l / r,
                                         })),
            (_, Decimal(l), Decimal(r)) => Ok(Decimal(match op {
                                             Add => *l + *r,
                                             Sub => *l - *r,
                                             Mul => *l * *r,
                                             _ => *l / *r,
                                         })),
            _ => Err(mismatch(op, left, right, index)),
        }
    }
}

/// Builds the error for operands of different or unsupported kinds.
pub(in crate::interpreter::evaluator) fn mismatch(op: BinaryOperator,
                                                  left: &Value,
                                                  right: &Value,
                                                  index: usize)
                                                  -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                               left.kind_name(),
                                               right.kind_name()),
                              index }
}
