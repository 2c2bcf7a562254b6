use std::io::{self, Write};

use log::debug;
use serde::Serialize;

use crate::data::dataset::Dataset;
use crate::grad::numerical::DEFAULT_STEP;
use crate::grad::scheme::Scheme;
use crate::report::point_report::PointReport;

pub const TABLE_TITLE: &str = "Gradient Comparison:";
pub const COLUMN_TITLES: &str = "w\tNumerical\tAnalytical\tDifference";
pub const SEPARATOR: &str = "----------------------------------------------";

/// One line of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub w: f64,
    pub numerical: f64,
    pub analytical: f64,
    /// |numerical - analytical|
    pub difference: f64,
}

impl From<PointReport> for ComparisonRow {
    fn from(report: PointReport) -> Self {
        ComparisonRow {
            w: report.w,
            numerical: report.numerical,
            analytical: report.analytical,
            difference: (report.numerical - report.analytical).abs(),
        }
    }
}

/// Evaluates both gradients at every weight in `w_values`, in order.
pub fn compare(w_values: &[f64], data: &Dataset, h: f64, scheme: Scheme) -> Vec<ComparisonRow> {
    w_values
        .iter()
        .map(|&w| {
            let row = ComparisonRow::from(PointReport::evaluate(w, data, h, scheme));
            debug!("compared at w = {w}: difference = {}", row.difference);
            row
        })
        .collect()
}

/// Writes the table: a blank line, the title, the column titles, a separator
/// and one tab-separated row per entry.
pub fn write_comparison<W: Write>(out: &mut W, rows: &[ComparisonRow]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{TABLE_TITLE}")?;
    writeln!(out, "{COLUMN_TITLES}")?;
    writeln!(out, "{SEPARATOR}")?;
    for row in rows {
        writeln!(
            out,
            "{:.1}\t{:.6}\t{:.6}\t{:.6}",
            row.w, row.numerical, row.analytical, row.difference
        )?;
    }
    Ok(())
}

/// Prints the comparison table for `w_values` to stdout using the default
/// dataset, `DEFAULT_STEP` and forward differences.
pub fn compare_gradients(w_values: &[f64]) -> io::Result<()> {
    let rows = compare(w_values, &Dataset::default(), DEFAULT_STEP, Scheme::Forward);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_comparison(&mut out, &rows)
}
