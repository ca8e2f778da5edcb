use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Backward context for the exponential.
///
/// d/dx e^x = e^x, so the rule reuses the forward output captured here
/// instead of recomputing the exponential.
#[derive(Debug)]
struct ExpBackward {
    a: Value,
    out_data: f64,
}

impl BackwardOp for ExpBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![self.out_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

/// e^a.
pub fn exp_op(a: &Value) -> Value {
    let out_data = a.data().exp();
    Value::from_op(
        out_data,
        "exp",
        Arc::new(ExpBackward {
            a: a.clone(),
            out_data,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
