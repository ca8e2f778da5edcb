// src/nn/losses/mse.rs

use crate::error::GradRustError;
use crate::nn::losses::Loss;
use crate::ops::arithmetic::{pow_op, sub_op};
use crate::ops::reduction::mean_op;
use crate::value::Value;

/// Mean squared error: `mean((pred - target)^2)`.
#[derive(Debug, Clone, Default)]
pub struct MseLoss;

impl MseLoss {
    pub fn new() -> Self {
        MseLoss
    }
}

impl Loss for MseLoss {
    fn calculate(&self, preds: &[Value], targets: &[f64]) -> Result<Value, GradRustError> {
        if preds.len() != targets.len() {
            return Err(GradRustError::DimensionMismatch {
                expected: preds.len(),
                actual: targets.len(),
                operation: "MseLoss calculate".to_string(),
            });
        }

        let losses: Vec<Value> = preds
            .iter()
            .zip(targets)
            .map(|(p, &t)| pow_op(&sub_op(p, &Value::new(t)), 2.0))
            .collect();
        Ok(mean_op(&losses))
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
