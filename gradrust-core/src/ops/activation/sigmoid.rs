use crate::ops::arithmetic::{add_op, div_op, neg_op};
use crate::ops::math_elem::exp_op;
use crate::value::Value;

/// Logistic sigmoid: `1 / (1 + exp(-a))`.
///
/// Deliberately has no derivative rule of its own: it is built purely by
/// composing the neg/exp/add/div operations, so its gradient is correct by
/// construction from rules that are verified independently. The price is a
/// handful of extra graph nodes per call; only the op label of the final
/// node is rewritten for diagnostics.
pub fn sigmoid_op(a: &Value) -> Value {
    let one = Value::new(1.0);
    let out = div_op(&one, &add_op(&Value::new(1.0), &exp_op(&neg_op(a))));
    out.write_data().op = "sigmoid".to_string();
    out
}

// --- Tests ---
#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
