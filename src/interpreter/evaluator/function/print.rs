use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Writes a value followed by a newline and returns `Nil`.
///
/// Accepts exactly one argument of any kind. The value is formatted using
/// its `Display` implementation.
///
/// # Parameters
/// - `output`: Destination of the text.
/// - `args`: Slice containing one argument.
/// - `index`: Token index of the call for error reporting.
///
/// # Example
/// ```
/// use plc::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut out = Vec::new();
/// let result = print(&mut out, &[Value::from(2.0)], 0).unwrap();
///
/// assert_eq!(result, Value::Nil);
/// assert_eq!(out, b"2.0\n");
/// ```
pub fn print(output: &mut dyn Write, args: &[Value], index: usize) -> EvalResult<Value> {
    let [value] = args else {
        return Err(RuntimeError::UnknownFunction { name: "print".to_string(),
                                                   arity: args.len(),
                                                   index });
    };

    writeln!(output, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string() })?;
    Ok(Value::Nil)
}
