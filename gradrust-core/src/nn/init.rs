use rand::distributions::{Distribution, Uniform};

use crate::nn::Parameter;
use crate::value::Value;

/// Weight initialization scheme for a [`Linear`](crate::nn::Linear) layer.
///
/// Both draw uniformly from a symmetric range; they differ in how the bound
/// depends on the layer's fan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    /// Xavier/Glorot: bound = sqrt(6 / (fan_in + fan_out)). Suited to
    /// output-facing layers.
    Xavier,
    /// Kaiming/He: bound = sqrt(2 / fan_in). Suited to hidden layers feeding
    /// saturating or ReLU activations.
    Kaiming,
}

impl Init {
    /// The half-width of the symmetric uniform range for a layer with the
    /// given fan.
    pub fn bound(&self, fan_in: usize, fan_out: usize) -> f64 {
        match self {
            Init::Xavier => (6.0 / (fan_in + fan_out) as f64).sqrt(),
            Init::Kaiming => (2.0 / fan_in as f64).sqrt(),
        }
    }

    /// Draws one weight row of `fan_in` parameters, uniform in ±bound.
    pub(crate) fn draw_row(&self, fan_in: usize, fan_out: usize) -> Vec<Parameter> {
        let bound = self.bound(fan_in, fan_out);
        let dist = Uniform::new_inclusive(-bound, bound);
        let mut rng = rand::thread_rng();
        (0..fan_in)
            .map(|_| Parameter::new_unnamed(Value::new(dist.sample(&mut rng))))
            .collect()
    }
}
