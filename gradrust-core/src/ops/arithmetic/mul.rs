use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::value::Value;

// --- Backward Operation Structure ---

/// Backward context for multiplication.
///
/// Each operand's partial derivative is the *other* operand's value, captured
/// here at construction time. Values are immutable after construction (only
/// leaf parameters are ever mutated, and then only between passes), so the
/// captured scalars cannot go stale within a graph.
#[derive(Debug)]
struct MulBackward {
    a: Value,
    b: Value,
    a_data: f64,
    b_data: f64,
}

impl BackwardOp for MulBackward {
    fn backward(&self, grad_output: f64) -> Vec<f64> {
        // d/da (a*b) = b, d/db (a*b) = a
        vec![self.b_data * grad_output, self.a_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two values.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_data = a.data();
    let b_data = b.data();
    Value::from_op(
        a_data * b_data,
        "*",
        Arc::new(MulBackward {
            a: a.clone(),
            b: b.clone(),
            a_data,
            b_data,
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
