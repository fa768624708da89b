use std::io::Write;

use crate::{
    ast::{Expr, Function},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::print,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context's output writer, the evaluated arguments
/// and the token index of the call.
pub type BuiltinFn = fn(&mut dyn Write, &[Value], usize) -> EvalResult<Value>;

/// A function bound in the runtime scope.
#[derive(Debug, Clone, Copy)]
pub enum Callable<'a> {
    /// A function implemented by the interpreter.
    Builtin(BuiltinFn),
    /// A function declared in the program.
    User(&'a Function),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BuiltinDef` (internal metadata) and `BUILTIN_TABLE`
/// (the static table read by [`builtins`]).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print" => { arity: 1, func: print::print },
}

/// Every builtin as `(name, arity, handler)`.
pub fn builtins() -> impl Iterator<Item = (&'static str, usize, BuiltinFn)> {
    BUILTIN_TABLE.iter().map(|def| (def.name, def.arity, def.func))
}

impl<'a> Context<'a> {
    /// Evaluates a function call.
    ///
    /// The function is resolved by name and argument count before any
    /// argument is evaluated. Arguments are evaluated left to right.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownFunction`] if no function of that name
    /// takes that many arguments, or any error raised by the arguments or the
    /// call itself.
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Expr],
                              index: usize)
                              -> EvalResult<Value> {
        let Some(&callable) = self.scope.lookup_function(name, arguments.len()) else {
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       arity: arguments.len(),
                                                       index });
        };

        let values = arguments.iter()
                              .map(|argument| self.eval(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.call(callable, values, index)
    }

    /// Calls a function with evaluated arguments.
    ///
    /// A user-defined function runs in a new frame pushed on top of the
    /// caller's scope, so its body sees the caller's locals as well as the
    /// globals. The frame holds the parameters and is removed when the call
    /// ends. A `RETURN` anywhere in the body ends the call with its value; a
    /// body that runs to its end yields `Nil`.
    pub fn call(&mut self,
                callable: Callable<'a>,
                arguments: Vec<Value>,
                index: usize)
                -> EvalResult<Value> {
        match callable {
            Callable::Builtin(handler) => handler(&mut *self.output, &arguments, index),
            Callable::User(function) => {
                self.scope.push();
                for (name, value) in function.parameters.iter().zip(arguments) {
                    self.scope.define_variable(name, value);
                }
                let flow = self.exec_block(&function.body);
                self.scope.pop();

                match flow? {
                    Flow::Returned(value) => Ok(value),
                    Flow::Completed => Ok(Value::Nil),
                }
            },
        }
    }
}
