use std::io::{self, Write};

use log::debug;
use serde::Serialize;

use crate::data::dataset::Dataset;
use crate::grad::analytical::AnalyticalGradient;
use crate::grad::scheme::Scheme;
use crate::loss::mse::MseLoss;

/// Cost and both gradient estimates at a single weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointReport {
    pub w: f64,
    pub cost: f64,
    pub numerical: f64,
    pub analytical: f64,
}

impl PointReport {
    pub fn evaluate(w: f64, data: &Dataset, h: f64, scheme: Scheme) -> PointReport {
        let cost = MseLoss::cost(w, data);
        let numerical = scheme.gradient(w, |w| MseLoss::cost(w, data), h);
        let analytical = AnalyticalGradient::at(w, data);
        debug!("w = {w}: cost = {cost}, numerical = {numerical}, analytical = {analytical}");
        PointReport { w, cost, numerical, analytical }
    }
}

/// Writes the block for one point:
///
/// ```text
///
/// At w = 1.5:
/// Cost: 1.1667
/// Numerical gradient: -4.6666
/// Analytical gradient: -4.6667
/// ```
pub fn write_point_report<W: Write>(out: &mut W, report: &PointReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "At w = {}:", report.w)?;
    writeln!(out, "Cost: {:.4}", report.cost)?;
    writeln!(out, "Numerical gradient: {:.4}", report.numerical)?;
    writeln!(out, "Analytical gradient: {:.4}", report.analytical)
}
