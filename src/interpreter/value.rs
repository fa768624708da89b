/// Runtime values.
///
/// Defines the `Value` enum produced by evaluation, its conversions from
/// literals and host types, the checked accessors the evaluator uses to
/// demand a particular kind of value, and the textual form written by
/// `print`.
pub mod core;
