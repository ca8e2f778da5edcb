use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Subtracts `b` from `a`.
///
/// Defined as `a + (-b)`, inheriting both forward value and gradient flow
/// from the add and neg rules; no separate derivative rule exists.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
