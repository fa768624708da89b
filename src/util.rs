/// Numeric conversion helpers.
///
/// Checked conversions from arbitrary-precision integers to the fixed-width
/// types used for literal ranges, list indices and exponents. Each returns
/// the caller's error when the value does not fit.
pub mod num;
