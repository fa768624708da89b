use num_bigint::BigInt;

/// Converts a `BigInt` to `i32` if it fits.
///
/// Integer literals are limited to this range.
///
/// ## Errors
/// Returns `Err(error)` if the value is outside `i32::MIN..=i32::MAX`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use plc::util::num::bigint_to_i32;
///
/// assert_eq!(bigint_to_i32(&BigInt::from(2_147_483_647), "too big"), Ok(i32::MAX));
/// assert_eq!(bigint_to_i32(&BigInt::from(2_147_483_648_i64), "too big"), Err("too big"));
/// ```
pub fn bigint_to_i32<E>(value: &BigInt, error: E) -> Result<i32, E> {
    i32::try_from(value).map_err(|_| error)
}

/// Converts a `BigInt` to `u32` if it fits.
///
/// Used for exponents; a negative exponent is rejected.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or larger than `u32::MAX`.
pub fn bigint_to_u32<E>(value: &BigInt, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}

/// Converts a `BigInt` to `usize` if it fits.
///
/// Used for list indices; a negative index is rejected.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or does not fit a `usize`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use plc::util::num::bigint_to_usize;
///
/// assert_eq!(bigint_to_usize(&BigInt::from(3), ()), Ok(3));
/// assert_eq!(bigint_to_usize(&BigInt::from(-1), ()), Err(()));
/// ```
pub fn bigint_to_usize<E>(value: &BigInt, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}
