use std::collections::HashMap;

use crate::nn::Parameter;
use crate::optim::optimizer_trait::Optimizer;

/// Stochastic gradient descent with optional momentum and weight decay.
///
/// With weight decay `wd > 0` the effective gradient is
/// `g' = g + wd * value`. With momentum `m > 0` each parameter keeps a
/// velocity `v <- m*v - lr*g'` and the update is `value += v`; without
/// momentum the update is plain `value -= lr * g'`.
///
/// Velocity persists across steps, keyed by parameter identity.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Parameter>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    velocity: HashMap<usize, f64>,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer.
    ///
    /// # Arguments
    /// * `params`: the parameters to optimize.
    /// * `lr`: the learning rate.
    /// * `momentum`: momentum factor (0.0 disables it).
    /// * `weight_decay`: L2 penalty factor (0.0 disables it).
    pub fn new(params: Vec<Parameter>, lr: f64, momentum: f64, weight_decay: f64) -> Self {
        Sgd {
            params,
            lr,
            momentum,
            weight_decay,
            velocity: HashMap::new(),
        }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        for param in &self.params {
            let mut g = param.grad();
            if self.weight_decay != 0.0 {
                g += self.weight_decay * param.data();
            }
            if self.momentum != 0.0 {
                let key = param.node_id() as usize;
                let v = self.velocity.entry(key).or_insert(0.0);
                *v = self.momentum * *v - self.lr * g;
                param.set_data(param.data() + *v);
            } else {
                param.set_data(param.data() - self.lr * g);
            }
        }
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }

    fn set_parameters(&mut self, params: Vec<Parameter>) {
        if !self.velocity.is_empty() {
            log::warn!(
                "Sgd parameter list replaced while velocity state exists; \
                 stale entries are kept, not migrated"
            );
        }
        self.params = params;
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
