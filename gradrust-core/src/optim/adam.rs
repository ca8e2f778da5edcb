use std::collections::HashMap;

use crate::error::GradRustError;
use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Adam optimizer with bias-corrected moment estimates.
///
/// Per parameter, keyed by identity: first moment `m` and second moment `v`.
/// One global step counter `t` is incremented once per [`Optimizer::step`]
/// call and shared by every parameter in that call.
///
/// Update per parameter (with `g' = g + weight_decay * value` when decay is
/// enabled):
///
/// ```text
/// m <- b1*m + (1-b1)*g'
/// v <- b2*v + (1-b2)*g'^2
/// m_hat = m / (1 - b1^t)
/// v_hat = v / (1 - b2^t)
/// value += -lr * m_hat / (sqrt(v_hat) + eps)
/// ```
#[derive(Debug)]
pub struct Adam {
    params: Vec<Parameter>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    weight_decay: f64,
    m: HashMap<usize, f64>,
    v: HashMap<usize, f64>,
    t: u64,
}

impl Adam {
    /// Default learning rate.
    pub const DEFAULT_LR: f64 = 1e-3;
    /// Default exponential decay rates for the moment estimates.
    pub const DEFAULT_BETAS: (f64, f64) = (0.9, 0.999);
    /// Default denominator fuzz.
    pub const DEFAULT_EPS: f64 = 1e-8;

    /// Creates an `Adam` optimizer with the default hyperparameters
    /// (lr = 1e-3, betas = (0.9, 0.999), eps = 1e-8, no weight decay).
    pub fn new(params: Vec<Parameter>) -> Self {
        let (beta1, beta2) = Self::DEFAULT_BETAS;
        Adam {
            params,
            lr: Self::DEFAULT_LR,
            beta1,
            beta2,
            eps: Self::DEFAULT_EPS,
            weight_decay: 0.0,
            m: HashMap::new(),
            v: HashMap::new(),
            t: 0,
        }
    }

    /// Creates an `Adam` optimizer with explicit hyperparameters.
    ///
    /// # Errors
    /// Returns a configuration error for a non-positive learning rate or
    /// epsilon, betas outside `[0, 1)`, or a negative weight decay.
    pub fn with_config(
        params: Vec<Parameter>,
        lr: f64,
        betas: (f64, f64),
        eps: f64,
        weight_decay: f64,
    ) -> Result<Self, GradRustError> {
        let (beta1, beta2) = betas;
        if lr <= 0.0 {
            return Err(GradRustError::ConfigurationError(
                "Learning rate must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&beta1) {
            return Err(GradRustError::ConfigurationError(
                "Beta1 must be in [0, 1)".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&beta2) {
            return Err(GradRustError::ConfigurationError(
                "Beta2 must be in [0, 1)".to_string(),
            ));
        }
        if eps <= 0.0 {
            return Err(GradRustError::ConfigurationError(
                "Epsilon must be positive".to_string(),
            ));
        }
        if weight_decay < 0.0 {
            return Err(GradRustError::ConfigurationError(
                "Weight decay must be non-negative".to_string(),
            ));
        }

        Ok(Adam {
            params,
            lr,
            beta1,
            beta2,
            eps,
            weight_decay,
            m: HashMap::new(),
            v: HashMap::new(),
            t: 0,
        })
    }

    /// The global step count so far.
    pub fn step_count(&self) -> u64 {
        self.t
    }
}

impl Optimizer for Adam {
    fn step(&mut self) {
        // One shared timestep per call, not per parameter.
        self.t += 1;
        let bias_correction1 = 1.0 - self.beta1.powi(self.t as i32);
        let bias_correction2 = 1.0 - self.beta2.powi(self.t as i32);

        for param in &self.params {
            let mut g = param.grad();
            if self.weight_decay != 0.0 {
                g += self.weight_decay * param.data();
            }
            let key = param.node_id() as usize;

            let m = self.m.entry(key).or_insert(0.0);
            *m = self.beta1 * *m + (1.0 - self.beta1) * g;
            let m_hat = *m / bias_correction1;

            let v = self.v.entry(key).or_insert(0.0);
            *v = self.beta2 * *v + (1.0 - self.beta2) * g * g;
            let v_hat = *v / bias_correction2;

            param.set_data(param.data() - self.lr * m_hat / (v_hat.sqrt() + self.eps));
        }
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn set_parameters(&mut self, params: Vec<Parameter>) {
        if !self.m.is_empty() {
            log::warn!(
                "Adam parameter list replaced while moment state exists; \
                 stale entries are kept, not migrated"
            );
        }
        self.params = params;
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
