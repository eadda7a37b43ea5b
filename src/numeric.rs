//! Numeric helpers for bit-width and logarithm computations
//!
//! Functions in this module operate on `f64` values, not big integers.
//! Out-of-domain inputs follow ordinary IEEE 754 semantics instead of
//! returning errors: `log2` of zero is negative infinity, `log2` of a
//! negative number is NaN, and `max_unsigned` of a very large width
//! saturates to infinity.

/// Pure: Return the base-2 logarithm of the given number
///
/// Computed as `ln(x) / ln(2)`. For `x <= 0.0` the standard floating-point
/// logarithm semantics apply: negative infinity at zero, NaN below zero.
///
/// # Examples
///
/// ```
/// use textnum::numeric::log2;
///
/// assert_eq!(log2(1.0), 0.0);
/// assert!((log2(8.0) - 3.0).abs() < 1e-12);
/// ```
pub fn log2(x: f64) -> f64 {
    x.ln() / std::f64::consts::LN_2
}

/// Pure: Return the maximum value representable by an unsigned integer of
/// the given bit width
///
/// Computed as `2^bits - 1` in `f64` arithmetic, with no bounds checking on
/// `bits`: above 53 bits the result loses integer precision, and very large
/// widths saturate to infinity. Callers keep `bits` in a regime where this
/// matters.
///
/// # Examples
///
/// ```
/// use textnum::numeric::max_unsigned;
///
/// assert_eq!(max_unsigned(8), 255.0);
/// assert_eq!(max_unsigned(16), 65535.0);
/// assert_eq!(max_unsigned(0), 0.0);
/// ```
pub fn max_unsigned(bits: u32) -> f64 {
    f64::from(bits).exp2() - 1.0
}
