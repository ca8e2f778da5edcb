use crate::error::GradRustError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::reduction::sum_op;
use crate::value::Value;

/// Applies an affine transformation to the incoming values:
/// `out[i] = dot(weights[i], input) + bias[i]`.
///
/// Weights are stored per output neuron (`weights[out][in]`), each row drawn
/// uniformly within the bound of the chosen [`Init`] scheme; biases start at
/// zero. The dot products are built from the elementary mul/add operations so
/// gradients flow through the layer like through any other expression.
#[derive(Debug)]
pub struct Linear {
    weights: Vec<Vec<Parameter>>,
    bias: Option<Vec<Parameter>>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a new Linear layer.
    ///
    /// # Arguments
    /// * `in_features` - Size of each input sample.
    /// * `out_features` - Size of each output sample.
    /// * `has_bias` - If `true`, the layer learns an additive bias
    ///   (initialized to 0).
    /// * `init` - Weight initialization scheme.
    pub fn new(in_features: usize, out_features: usize, has_bias: bool, init: Init) -> Self {
        let weights = (0..out_features)
            .map(|_| init.draw_row(in_features, out_features))
            .collect();
        let bias = has_bias.then(|| {
            (0..out_features)
                .map(|_| Parameter::new_unnamed(Value::new(0.0)))
                .collect()
        });
        Linear {
            weights,
            bias,
            in_features,
            out_features,
        }
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// The weight row feeding output neuron `i`.
    pub fn weight_row(&self, i: usize) -> &[Parameter] {
        &self.weights[i]
    }

    /// The bias vector, if the layer has one.
    pub fn bias(&self) -> Option<&[Parameter]> {
        self.bias.as_deref()
    }
}

impl Module for Linear {
    fn forward(&self, input: &[Value]) -> Result<Vec<Value>, GradRustError> {
        if input.len() != self.in_features {
            return Err(GradRustError::DimensionMismatch {
                expected: self.in_features,
                actual: input.len(),
                operation: "Linear forward".to_string(),
            });
        }

        let mut out = Vec::with_capacity(self.out_features);
        for i in 0..self.out_features {
            // dot product (weight row i . input) + bias[i]
            let products: Vec<Value> = self.weights[i]
                .iter()
                .zip(input)
                .map(|(w, x)| mul_op(w, x))
                .collect();
            let mut s = sum_op(&products);
            if let Some(bias) = &self.bias {
                s = add_op(&s, &bias[i]);
            }
            out.push(s);
        }
        Ok(out)
    }

    fn parameters(&self) -> Vec<Parameter> {
        let mut params = Vec::with_capacity(self.out_features * (self.in_features + 1));
        for row in &self.weights {
            params.extend(row.iter().cloned());
        }
        if let Some(bias) = &self.bias {
            params.extend(bias.iter().cloned());
        }
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
