use crate::ops::arithmetic::{div_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// Numerically stable softmax over a slice of logits:
/// `softmax(x)_i = exp(x_i - max(x)) / sum_j exp(x_j - max(x))`.
///
/// The maximum is selected by comparing raw `data` but kept as the *node* of
/// the maximal input, so the subtraction participates in the graph like any
/// other operation (the max logit computes `exp(x - x)`, whose path
/// contributions cancel correctly). Huge logits no longer overflow: the
/// largest exponent taken is `exp(0)`.
///
/// An empty slice yields an empty vec.
pub fn stable_softmax(logits: &[Value]) -> Vec<Value> {
    if logits.is_empty() {
        return Vec::new();
    }

    let mut max_val = logits[0].clone();
    for v in &logits[1..] {
        if v.data() > max_val.data() {
            max_val = v.clone();
        }
    }

    let exps: Vec<Value> = logits.iter().map(|v| exp_op(&sub_op(v, &max_val))).collect();
    let denom = sum_op(&exps);
    exps.iter().map(|e| div_op(e, &denom)).collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
