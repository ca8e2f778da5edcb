// src/nn/losses/cross_entropy.rs

use crate::error::GradRustError;
use crate::nn::losses::Loss;
use crate::ops::activation::stable_softmax;
use crate::ops::arithmetic::neg_op;
use crate::ops::math_elem::ln_op;
use crate::ops::reduction::mean_op;
use crate::value::Value;

/// Cross-entropy for raw logits with one-hot targets.
///
/// Applies [`stable_softmax`] to the logits, then returns the mean of
/// `-log(prob)` over the positions where the target equals exactly 1.0.
/// Positions with a zero target contribute nothing.
///
/// Known edge case: when no target equals exactly 1.0 the result is the mean
/// over an empty list, i.e. a constant `Value(0.0)` with no gradient path
/// back to the logits. This mirrors observed behavior and is deliberately
/// not special-cased further.
#[derive(Debug, Clone, Default)]
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    pub fn new() -> Self {
        CrossEntropyLoss
    }
}

impl Loss for CrossEntropyLoss {
    fn calculate(&self, logits: &[Value], targets: &[f64]) -> Result<Value, GradRustError> {
        if logits.len() != targets.len() {
            return Err(GradRustError::DimensionMismatch {
                expected: logits.len(),
                actual: targets.len(),
                operation: "CrossEntropyLoss calculate".to_string(),
            });
        }

        let probs = stable_softmax(logits);
        let losses: Vec<Value> = probs
            .iter()
            .zip(targets)
            .filter(|(_, &t)| t == 1.0)
            .map(|(p, _)| neg_op(&ln_op(p)))
            .collect();
        Ok(mean_op(&losses))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
