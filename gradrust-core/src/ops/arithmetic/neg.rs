use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

/// Backward context for negation.
#[derive(Debug)]
struct NegBackward {
    a: Value,
}

impl BackwardOp for NegBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        vec![-grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone()]
    }
}

/// Negates a value.
pub fn neg_op(a: &Value) -> Value {
    Value::from_op(-a.data(), "neg", Arc::new(NegBackward { a: a.clone() }))
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
