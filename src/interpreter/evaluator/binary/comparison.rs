use std::cmp::Ordering;

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
    /// Evaluates `<`, `>`, `==` or `!=`.
    ///
    /// Equality compares any two values; values of different kinds are never
    /// equal. Ordering requires both operands to be of the same kind among
    /// integers, decimals, characters, strings and booleans.
    ///
    /// # Example
    /// ```
    /// use plc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Context, value::core::Value},
    /// };
    ///
    /// let less = Context::eval_comparison(BinaryOperator::Less, &'a'.into(), &'b'.into(), 0);
    /// assert_eq!(less.unwrap(), Value::from(true));
    ///
    /// let equal = Context::eval_comparison(BinaryOperator::Equal, &1.into(), &1.0.into(), 0);
    /// assert_eq!(equal.unwrap(), Value::from(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           index: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, Less, NotEqual};

        let result = match op {
            Equal => left == right,
            NotEqual => left != right,
            Less | Greater => {
                let ordering = compare(left, right).ok_or_else(|| mismatch(op, left, right, index))?;
                ordering == if op == Less { Ordering::Less } else { Ordering::Greater }
            },
            _ => return Err(mismatch(op, left, right, index)),
        };

        Ok(Value::Boolean(result))
    }
}

/// Orders two values of the same comparable kind.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => Some(l.cmp(r)),
        (Value::Decimal(l), Value::Decimal(r)) => Some(l.cmp(r)),
        (Value::Character(l), Value::Character(r)) => Some(l.cmp(r)),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
        _ => None,
    }
}
