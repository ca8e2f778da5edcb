use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Backward context for the rectified linear unit.
///
/// Gates on the captured *input* value: the gradient passes through only
/// where the input was strictly positive. The subgradient at exactly 0 is 0.
#[derive(Debug)]
struct ReluBackward {
    a: Value,
    a_data: f64,
}

impl BackwardOp for ReluBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![if self.a_data > 0.0 { grad_output } else { 0.0 }]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

/// max(a, 0).
pub fn relu_op(a: &Value) -> Value {
    let a_data = a.data();
    let out = if a_data > 0.0 { a_data } else { 0.0 };
    Value::from_op(
        out,
        "relu",
        Arc::new(ReluBackward {
            a: a.clone(),
            a_data,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
