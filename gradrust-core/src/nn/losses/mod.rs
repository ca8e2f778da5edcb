pub mod cross_entropy;
pub mod mse;

pub use cross_entropy::CrossEntropyLoss;
pub use mse::MseLoss;

use crate::error::GradRustError;
use crate::value::Value;

/// Common interface for loss functions.
///
/// A loss consumes a sequence of predicted values (graph nodes) and a
/// sequence of plain-number targets and produces one scalar loss node to run
/// `backward` from.
pub trait Loss: std::fmt::Debug {
    /// Computes the scalar loss.
    ///
    /// # Errors
    /// Returns `GradRustError::DimensionMismatch` when the prediction and
    /// target sequences differ in length.
    fn calculate(&self, preds: &[Value], targets: &[f64]) -> Result<Value, GradRustError>;
}
