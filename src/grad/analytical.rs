use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::loss::mse::MseLoss;

/// Closed-form derivative of `MseLoss::cost` with respect to `w`.
pub struct AnalyticalGradient;

impl AnalyticalGradient {
    /// dC/dw = 2·mean(x_i·(w·x_i - y_i))
    pub fn at(w: f64, data: &Dataset) -> f64 {
        let n = data.len() as f64;
        let weighted: f64 = data
            .x()
            .iter()
            .zip(MseLoss::residuals(w, data))
            .map(|(x, r)| x * r)
            .sum();
        2.0 * weighted / n
    }
}

/// Analytical gradient at `w`, defaulting `x` / `y` exactly as
/// [`cost_function`](crate::loss::mse::cost_function) does.
pub fn analytical_gradient(w: f64, x: Option<&[f64]>, y: Option<&[f64]>) -> Result<f64> {
    let data = Dataset::with_defaults(x, y)?;
    Ok(AnalyticalGradient::at(w, &data))
}
