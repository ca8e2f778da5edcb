use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward context for raising a value to a constant real exponent.
///
/// Only constant exponents are supported: the exponent is a plain `f64` in
/// the signature, so a non-constant (graph-node) exponent is unrepresentable
/// rather than rejected at runtime.
#[derive(Debug)]
struct PowBackward {
    base: Value,
    base_data: f64,
    exponent: f64,
}

impl BackwardOp for PowBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d/dx x^e = e * x^(e-1), with a guard for the zero base: when
        // e - 1 < 0 the power itself diverges, so the contribution is
        // pinned to 0 instead of propagating inf/NaN.
        let local = if self.base_data == 0.0 && self.exponent - 1.0 < 0.0 {
            0.0
        } else {
            self.exponent * self.base_data.powf(self.exponent - 1.0)
        };
        vec![local * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.base.clone()]
    }
}

// --- Forward Operation ---

/// Raises `base` to the power of a constant real `exponent`.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let base_data = base.data();
    Value::from_op(
        base_data.powf(exponent),
        format!("**{}", exponent),
        Arc::new(PowBackward {
            base: base.clone(),
            base_data,
            exponent,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
