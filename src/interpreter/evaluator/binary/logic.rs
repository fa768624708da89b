use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `&&` or `||`, skipping the right operand when the left one
    /// decides the result.
    pub(crate) fn eval_short_circuit(&mut self,
                                     op: BinaryOperator,
                                     left: &Expr,
                                     right: &Expr,
                                     index: usize)
                                     -> EvalResult<Value> {
        let left = self.eval(left)?.as_bool(index)?;
        let decided = match op {
            BinaryOperator::And => !left,
            _ => left,
        };
        if decided {
            return Ok(Value::Boolean(left));
        }

        let right = self.eval(right)?.as_bool(index)?;
        Ok(Value::Boolean(right))
    }
}
