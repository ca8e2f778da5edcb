use std::fmt::Debug;

use crate::value::Value;

/// Defines the interface for the backward pass of a differentiable operation.
///
/// Any operation that creates a non-leaf [`Value`] must have an associated
/// `BackwardOp` implementation. It is stored in the output value's `grad_fn`
/// field and invoked during [`Value::backward`] to propagate gradients
/// according to the chain rule.
///
/// Implementations capture, at construction time, everything the local rule
/// needs: strong handles to the operand values (which double as the parent
/// edges of the graph) and any forward-computed scalars (for multiplication,
/// the *other* operand's value as of construction; for `exp`, the forward
/// output; and so on). Values are immutable after construction, so captured
/// scalars never go stale.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the chain-rule contribution for each operand.
    ///
    /// Receives dL/dOutput (`grad_output`) and returns dL/dInput_i for each
    /// input, in the same order as [`BackwardOp::inputs`]. The caller *adds*
    /// each contribution to the operand's gradient accumulator; the rule
    /// itself never overwrites anything, which is what makes gradients
    /// accumulate correctly across multiple consumer paths in a DAG.
    fn backward(&self, grad_output: f64) -> Vec<f64>;

    /// Returns handles to the operand values of the forward operation.
    ///
    /// The order **must** match the order of contributions returned by
    /// [`BackwardOp::backward`]. These handles are how the graph traversal
    /// reaches parents; identity (not numeric equality) distinguishes nodes.
    fn inputs(&self) -> Vec<Value>;
}
