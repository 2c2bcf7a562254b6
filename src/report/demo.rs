use std::io::Write;

use log::info;

use crate::config::demo_config::DemoConfig;
use crate::error::Result;
use crate::report::comparison::{compare, write_comparison};
use crate::report::point_report::{write_point_report, PointReport};

pub const BANNER: &str = "=== Gradient Calculation Demo ===";

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs the whole demo against `out`: the banner, one block per
/// `config.test_points` entry, then the comparison table over
/// `config.sweep()`.
pub fn run_demo<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    info!(
        "demo: {} test points, {} sweep points, h = {}, scheme = {:?}",
        config.test_points.len(),
        config.sweep_points,
        config.step,
        config.scheme
    );

    writeln!(out, "{BANNER}")?;

    // ── Per-point blocks ───────────────────────────────────────────────────
    for &w in &config.test_points {
        let report = PointReport::evaluate(w, &config.data, config.step, config.scheme);
        write_point_report(out, &report)?;
    }

    // ── Comparison table ───────────────────────────────────────────────────
    let rows = compare(&config.sweep(), &config.data, config.step, config.scheme);
    write_comparison(out, &rows)?;

    out.flush()?;
    Ok(())
}
