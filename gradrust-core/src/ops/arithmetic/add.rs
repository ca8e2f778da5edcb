use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward context for addition.
#[derive(Debug)]
struct AddBackward {
    a: Value,
    b: Value,
}

impl BackwardOp for AddBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d/da (a+b) = 1, d/db (a+b) = 1
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two values, producing a new graph node labeled `+`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    let out = a.data() + b.data();
    Value::from_op(
        out,
        "+",
        Arc::new(AddBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
