use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;
use crate::EPS;

// --- LnBackward Definition ---

/// Backward context for the natural logarithm.
///
/// Stores the *clamped* input (see [`ln_op`]); the gradient is `1/clamped`,
/// reusing the exact value the forward pass took the logarithm of.
#[derive(Debug)]
struct LnBackward {
    a: Value,
    safe: f64,
}

impl BackwardOp for LnBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![grad_output / self.safe]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

// --- ln_op Implementation ---

/// Natural logarithm with an epsilon guard.
///
/// The input is clamped to a minimum of [`EPS`] before taking the logarithm,
/// and the same clamped value feeds the backward denominator. Near-zero and
/// non-positive inputs therefore produce finite, deterministic results
/// (silently biased near zero) instead of NaN/-inf or an error. This is a
/// deliberate numerical guard, not a hidden defect.
pub fn ln_op(a: &Value) -> Value {
    let a_data = a.data();
    let safe = if a_data > EPS { a_data } else { EPS };
    Value::from_op(
        safe.ln(),
        "log",
        Arc::new(LnBackward { a: a.clone(), safe }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
