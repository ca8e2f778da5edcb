pub mod sequential;

pub use sequential::{Activation, Mlp};
