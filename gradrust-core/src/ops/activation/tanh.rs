use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Backward context for the hyperbolic tangent.
///
/// d/dx tanh(x) = 1 - tanh(x)^2; the forward output `t` is captured.
#[derive(Debug)]
struct TanhBackward {
    a: Value,
    t: f64,
}

impl BackwardOp for TanhBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![(1.0 - self.t * self.t) * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

/// tanh(a).
pub fn tanh_op(a: &Value) -> Value {
    let t = a.data().tanh();
    Value::from_op(t, "tanh", Arc::new(TanhBackward { a: a.clone(), t }))
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
