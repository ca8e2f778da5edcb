use approx::relative_eq;
use thiserror::Error;

use crate::value::Value;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` is run once on leaves built from `inputs` to obtain analytical
/// gradients via [`Value::backward`], then twice more per input with the
/// input perturbed by `±epsilon` to form the numerical estimate
/// `(f(x+eps) - f(x-eps)) / (2 eps)`. Each pair must agree within
/// `tolerance` (relative, with `tolerance` also serving as the absolute
/// floor for near-zero gradients).
///
/// `func` must be deterministic and must return a scalar output node
/// reachable from every leaf it uses.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    // --- Analytical pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        // --- Numerical estimate: central difference ---
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let plus_leaves: Vec<Value> = plus.iter().map(|&x| Value::new(x)).collect();
        let loss_plus = func(&plus_leaves).data();

        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;
        let minus_leaves: Vec<Value> = minus.iter().map(|&x| Value::new(x)).collect();
        let loss_minus = func(&minus_leaves).data();

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(analytical, numerical, max_relative = tolerance, epsilon = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::reduction::sum_op;

    #[test]
    fn test_check_grad_polynomial() {
        // f(x, y) = x^2 * y + y^3
        let f = |xs: &[Value]| &(&xs[0].powf(2.0) * &xs[1]) + &xs[1].powf(3.0);
        check_grad(f, &[1.5, -0.7], 1e-5, 1e-4).unwrap();
    }

    #[test]
    fn test_check_grad_transcendental_mix() {
        // f(x, y) = tanh(x * y) + exp(x) / (y^2 + 1)
        let f = |xs: &[Value]| {
            let left = (&xs[0] * &xs[1]).tanh();
            let right = &xs[0].exp() / &(&xs[1].powf(2.0) + 1.0);
            &left + &right
        };
        check_grad(f, &[0.3, 0.9], 1e-5, 1e-4).unwrap();
    }

    #[test]
    fn test_check_grad_sigmoid_chain() {
        let f = |xs: &[Value]| (&xs[0] * 2.0).sigmoid().ln();
        check_grad(f, &[0.4], 1e-5, 1e-4).unwrap();
    }

    #[test]
    fn test_check_grad_shared_subexpression() {
        // Diamond: s = x + y used by both factors of a product.
        let f = |xs: &[Value]| {
            let s = &xs[0] + &xs[1];
            let prods = vec![&s * &s, &s * 3.0];
            sum_op(&prods)
        };
        check_grad(f, &[0.5, 1.25], 1e-5, 1e-4).unwrap();
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // relu has a kink at 0; finite differences straddle it and disagree
        // with the one-sided analytical convention.
        let f = |xs: &[Value]| xs[0].relu();
        let err = check_grad(f, &[0.0], 1e-5, 1e-4).unwrap_err();
        assert!(matches!(err, GradCheckError::GradientMismatch { .. }));
    }
}
