use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{List, Value},
    },
    util::num::bigint_to_usize,
};

impl Context<'_> {
    /// Looks up a variable by name.
    ///
    /// Lookup begins at the innermost frame and proceeds outward toward the
    /// globals. Lists are returned as shared handles.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `index`: Token index for error reporting.
    ///
    /// # Example
    /// ```
    /// use plc::interpreter::{evaluator::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// ctx.scope.define_variable("x", Value::from(10));
    ///
    /// assert_eq!(ctx.eval_variable("x", 0).unwrap(), Value::from(10));
    /// assert!(ctx.eval_variable("y", 0).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, index: usize) -> EvalResult<Value> {
        self.scope
            .lookup_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           index })
    }

    /// Reads the element at `position` of the list bound to `name`.
    pub fn eval_element(&self, name: &str, position: &Value, index: usize) -> EvalResult<Value> {
        let list = self.eval_variable(name, index)?.as_list(index)?;
        let offset = checked_offset(&list, position, index)?;
        let element = list.borrow()[offset].clone();
        Ok(element)
    }

    /// Executes an assignment.
    ///
    /// A plain variable is rebound in the nearest frame that declares it. A
    /// list element is replaced inside the shared list, so every alias of the
    /// list sees the new element. The receiver's offset is evaluated before
    /// the value.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if:
    /// - the receiver is not a variable or list element,
    /// - the variable is undefined,
    /// - the variable does not hold a list or the offset is out of bounds.
    pub(crate) fn exec_assignment(&mut self, receiver: &Expr, value: &Expr) -> EvalResult<()> {
        let Expr::Access { name, offset, index } = receiver else {
            return Err(RuntimeError::InvalidAssignmentTarget { index: receiver.index() });
        };

        if let Some(offset) = offset {
            let position = self.eval(offset)?;
            let value = self.eval(value)?;
            let list = self.eval_variable(name, *index)?.as_list(*index)?;
            let offset = checked_offset(&list, &position, *index)?;
            list.borrow_mut()[offset] = value;
            return Ok(());
        }

        let value = self.eval(value)?;
        let slot = self.scope
                       .lookup_variable_mut(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                      index: *index })?;
        *slot = value;
        Ok(())
    }
}

/// Converts `position` to an offset inside `list`.
fn checked_offset(list: &List, position: &Value, index: usize) -> EvalResult<usize> {
    let position = position.as_integer(index)?;
    let len = list.borrow().len();
    let out_of_bounds = || RuntimeError::IndexOutOfBounds { len,
                                                            found: position.to_string(),
                                                            index };

    let offset = bigint_to_usize(position, out_of_bounds())?;
    if offset < len { Ok(offset) } else { Err(out_of_bounds()) }
}
