/// Function call dispatch.
///
/// Defines the callables stored in the runtime scope, the builtin table and
/// the call protocol for user-defined functions.
pub mod core;

/// The `print` builtin.
pub mod print;
