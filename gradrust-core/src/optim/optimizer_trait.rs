use crate::nn::Parameter;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer is bound to a list of parameters and updates their scalar
/// values in place from the gradients a completed backward pass left behind.
/// Per-parameter auxiliary state (velocity, moment estimates) is keyed by
/// parameter identity against exactly that list.
pub trait Optimizer {
    /// Performs a single optimization step, mutating every managed
    /// parameter's value in place.
    ///
    /// Must be called after a completed backward pass has populated the
    /// gradients. Calling it earlier is not guarded against: gradients
    /// simply hold their last-set value (likely 0), producing a no-op or
    /// stale update.
    fn step(&mut self);

    /// Resets every managed parameter's gradient accumulator to 0.
    ///
    /// Typically called before the next forward/backward iteration so
    /// gradients do not accumulate across iterations.
    fn zero_grad(&mut self);

    /// Replaces the managed parameter list.
    ///
    /// Sharp edge, kept as observed: per-identity state for parameters no
    /// longer (or newly) present is neither migrated nor cleared. Stale
    /// entries linger harmlessly for removed parameters and new parameters
    /// start from zeroed state.
    fn set_parameters(&mut self, params: Vec<Parameter>);
}
