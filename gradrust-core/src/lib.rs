// Déclare les modules principaux de la crate
pub mod autograd;
pub mod model;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod value;
pub mod value_data;

// Ré-exporte le type Value pour qu'il soit accessible directement via `gradrust_core::Value`
pub use value::Value;

pub mod error;
pub use error::GradRustError;

/// Small epsilon used by the numerical guards (the `ln` input clamp).
pub const EPS: f64 = 1e-12;
