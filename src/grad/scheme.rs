use serde::{Deserialize, Serialize};

use crate::grad::numerical::{central_gradient, numerical_gradient};

/// Finite-difference scheme used to estimate a gradient.
///
/// - `Forward` — (f(w+h) - f(w)) / h; first-order, one extra evaluation.
/// - `Central` — (f(w+h) - f(w-h)) / 2h; second-order, two evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    #[default]
    Forward,
    Central,
}

impl Scheme {
    pub fn gradient<F>(self, w: f64, cost: F, h: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Scheme::Forward => numerical_gradient(w, cost, h),
            Scheme::Central => central_gradient(w, cost, h),
        }
    }
}
