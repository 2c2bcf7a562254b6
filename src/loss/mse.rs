use crate::data::dataset::Dataset;
use crate::error::Result;

/// Mean-squared error of the one-parameter linear model `ŷ = w·x`.
pub struct MseLoss;

impl MseLoss {
    /// Per-sample residuals: w·x_i - y_i
    pub fn residuals(w: f64, data: &Dataset) -> impl Iterator<Item = f64> + '_ {
        data.samples().map(move |(x, y)| w * x - y)
    }

    /// Scalar MSE: mean((w·x_i - y_i)²)
    pub fn cost(w: f64, data: &Dataset) -> f64 {
        let n = data.len() as f64;
        Self::residuals(w, data)
            .map(|r| r.powi(2))
            .sum::<f64>() / n
    }
}

/// MSE cost at `w`, with `x` / `y` falling back to the default vectors when
/// omitted.
///
/// Returns an error only for unusable input (mismatched or empty vectors);
/// overflow shows up as `inf`/`NaN` in the returned value.
pub fn cost_function(w: f64, x: Option<&[f64]>, y: Option<&[f64]>) -> Result<f64> {
    let data = Dataset::with_defaults(x, y)?;
    Ok(MseLoss::cost(w, &data))
}
