// src/value/mod.rs

use std::sync::{Arc, RwLock};

use crate::autograd::{BackwardOp, NodeId};
use crate::value_data::ValueData;

mod autograd;
mod traits;

/// A scalar value participating in automatic differentiation.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared ownership:** the same node may be the operand of several
///     operations (the graph is a DAG, not a tree), and every backward rule
///     holds a handle to its operands, so a node is never freed while a
///     descendant can still traverse to it.
/// 2.  **Interior mutability:** the gradient accumulator (and, for trainable
///     parameters, the data itself) is mutated through shared handles.
///
/// Cloning a `Value` is cheap: it clones the `Arc`, not the data block, and
/// both handles refer to the same graph node.
///
/// The engine is single-threaded by contract. The shared handles are `Send`
/// and `Sync`, but concurrent use — two threads running `backward` over
/// overlapping graphs, or optimizer steps racing on the same parameters —
/// is unsupported: gradients would interleave arbitrarily. This is
/// documented, not guarded against. Graph memory grows with every operation
/// performed (nothing prunes a graph after a backward pass); drop stale
/// roots to let a graph be reclaimed.
pub struct Value {
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a new leaf value from a numeric literal.
    ///
    /// Leaves have no producing operation; their `backward` rule is absent
    /// and a backward pass simply deposits a gradient on them.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::new(data))),
        }
    }

    /// Creates a value produced by an operation, wiring up its backward rule.
    pub(crate) fn from_op(
        data: f64,
        op: impl Into<String>,
        grad_fn: Arc<dyn BackwardOp + Send + Sync>,
    ) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(data, op.into(), grad_fn))),
        }
    }

    /// Returns the forward scalar.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Returns the accumulated gradient, d(output)/d(self) as of the last
    /// backward pass (0.0 if none has reached this node yet).
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the diagnostic label of the operation that produced this
    /// value (empty for leaves).
    pub fn op(&self) -> String {
        self.read_data().op.clone()
    }

    /// Stable identity of this graph node. See [`NodeId`].
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Overwrites the forward scalar in place.
    ///
    /// Only meaningful for leaf parameters driven by an optimizer step;
    /// interior nodes captured their operands' values at construction and
    /// would not observe the change.
    pub(crate) fn set_data(&self, data: f64) {
        self.write_data().data = data;
    }

    /// Acquires a read lock on the value's data block.
    ///
    /// Panics if the RwLock is poisoned.
    pub(crate) fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the value's data block.
    ///
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }

    // --- Elementary math, thin wrappers over the ops modules ---

    /// Raises this value to a constant real exponent.
    ///
    /// The exponent is a plain `f64`, never a graph node: differentiation
    /// w.r.t. the exponent is unsupported and unrepresentable here.
    pub fn powf(&self, exponent: f64) -> Value {
        crate::ops::arithmetic::pow_op(self, exponent)
    }

    /// e^self.
    pub fn exp(&self) -> Value {
        crate::ops::math_elem::exp_op(self)
    }

    /// Natural logarithm, with the input clamped to a small positive epsilon
    /// (see [`crate::EPS`]) so near-zero and non-positive inputs stay finite.
    pub fn ln(&self) -> Value {
        crate::ops::math_elem::ln_op(self)
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Value {
        crate::ops::activation::tanh_op(self)
    }

    /// Rectified linear unit: max(self, 0).
    pub fn relu(&self) -> Value {
        crate::ops::activation::relu_op(self)
    }

    /// Logistic sigmoid, built by composition (`1 / (1 + exp(-x))`) so its
    /// gradient comes from the already-verified exp/add/div rules.
    pub fn sigmoid(&self) -> Value {
        crate::ops::activation::sigmoid_op(self)
    }
}
