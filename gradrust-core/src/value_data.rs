// src/value_data.rs

use std::sync::Arc;

use crate::autograd::BackwardOp;

/// Internal storage and metadata for a [`Value`](crate::value::Value).
///
/// Holds the forward scalar, the gradient accumulator and the autograd
/// linkage. It is wrapped in `Arc<RwLock<ValueData>>` by the `Value` struct
/// to allow shared ownership and interior mutability.
#[derive(Debug)]
pub struct ValueData {
    /// The forward numeric result. Immutable after construction, except for
    /// leaf values used as trainable parameters, which an optimizer step
    /// mutates in place.
    pub(crate) data: f64,
    /// Gradient accumulator, d(output)/d(this value). Reset to 0 and
    /// recomputed on every backward pass that reaches this node.
    pub(crate) grad: f64,
    /// Diagnostic label naming the operation that produced this value
    /// (e.g. "+", "*", "tanh"). Empty for leaves. Purely informational.
    pub(crate) op: String,
    /// The backward rule captured at construction, linking this value to the
    /// operation that produced it. The rule owns strong handles to the
    /// operand values, so every ancestor stays alive while a descendant can
    /// still reach it. Leaf values have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<dyn BackwardOp + Send + Sync>>,
}

impl ValueData {
    /// Creates the data block for a leaf value (no producing operation).
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: String::new(),
            grad_fn: None,
        }
    }

    /// Creates the data block for an operation result.
    pub(crate) fn from_op(
        data: f64,
        op: String,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            grad_fn: Some(grad_fn),
        }
    }
}
