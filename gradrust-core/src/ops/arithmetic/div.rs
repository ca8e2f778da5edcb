use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Divides `a` by `b`.
///
/// Defined as `a * b^(-1)`, inheriting correctness from the mul and pow
/// rules; no separate derivative rule exists. A zero divisor therefore
/// follows pow's numerics: the forward value is infinite and the gradient
/// through the reciprocal is pinned to 0 by the zero-base guard.
pub fn div_op(a: &Value, b: &Value) -> Value {
    mul_op(a, &pow_op(b, -1.0))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
