use crate::error::GradRustError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for all neural network modules (layers, containers, etc.).
///
/// A module maps a sequence of scalar values to a sequence of scalar values,
/// building the computation graph as it goes, and exposes its trainable
/// parameters for an optimizer to consume.
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `input`: the input values, one scalar per feature.
    ///
    /// # Errors
    /// Returns `GradRustError::DimensionMismatch` if the input length does
    /// not match what the module expects.
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError>;

    /// Returns every trainable parameter owned transitively by the module.
    ///
    /// The order is deterministic and load-bearing: per layer, weight rows in
    /// output-index order first, then biases, with layer order preserved.
    /// Optimizer per-parameter state is keyed by identity against exactly
    /// this list.
    fn parameters(&self) -> Vec<Parameter>;

    /// Resets the gradient accumulator of every parameter to 0.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }
}
