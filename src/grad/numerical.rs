use log::warn;

use crate::data::dataset::Dataset;
use crate::loss::mse::MseLoss;

/// Step size used when the caller has no reason to pick another.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Forward-difference slope of `cost` at `w`: (cost(w + h) - cost(w)) / h
///
/// `h` is used as given. Truncation error grows with `h`, cancellation error
/// grows as `h` shrinks; `h == 0` produces `NaN` or `±inf`.
pub fn numerical_gradient<F>(w: f64, cost: F, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let grad = (cost(w + h) - cost(w)) / h;
    if !grad.is_finite() {
        warn!("forward difference at w = {w} with h = {h} is not finite: {grad}");
    }
    grad
}

/// Central-difference slope of `cost` at `w`: (cost(w + h) - cost(w - h)) / 2h
///
/// Second-order accurate, so for a quadratic cost the only error left is
/// floating-point rounding.
pub fn central_gradient<F>(w: f64, cost: F, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let grad = (cost(w + h) - cost(w - h)) / (2.0 * h);
    if !grad.is_finite() {
        warn!("central difference at w = {w} with h = {h} is not finite: {grad}");
    }
    grad
}

/// Forward difference of the default-data MSE cost with `DEFAULT_STEP`.
pub fn default_numerical_gradient(w: f64) -> f64 {
    let data = Dataset::default();
    numerical_gradient(w, |w| MseLoss::cost(w, &data), DEFAULT_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_function_is_exact_up_to_rounding() {
        let grad = numerical_gradient(4.0, |w| 3.0 * w + 1.0, 1e-3);
        assert!((grad - 3.0).abs() < 1e-9);
    }

    #[test]
    fn forward_difference_carries_first_order_bias() {
        // d/dw w² = 2w; the forward difference adds exactly h.
        let h = 1e-2;
        let grad = numerical_gradient(1.0, |w| w * w, h);
        assert!((grad - (2.0 + h)).abs() < 1e-9);
    }

    #[test]
    fn central_difference_cancels_the_bias() {
        let grad = central_gradient(1.0, |w| w * w, 1e-2);
        assert!((grad - 2.0).abs() < 1e-9);
    }

    #[test]
    fn closure_captures_custom_data() {
        let data = Dataset::new(vec![2.0], vec![0.0]).unwrap();
        // cost = 4w², slope = 8w
        let grad = central_gradient(0.5, |w| MseLoss::cost(w, &data), DEFAULT_STEP);
        assert!((grad - 4.0).abs() < 1e-6);
    }

    #[test_log::test]
    fn zero_step_is_not_guarded() {
        let grad = numerical_gradient(1.0, |w| w * w, 0.0);
        assert!(grad.is_nan());
    }

    #[test]
    fn default_gradient_vanishes_near_the_fit() {
        assert!(default_numerical_gradient(2.0).abs() < 1e-3);
    }
}
