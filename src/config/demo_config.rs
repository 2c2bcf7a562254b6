use serde::{Deserialize, Serialize};

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::grad::numerical::DEFAULT_STEP;
use crate::grad::scheme::Scheme;
use crate::math::linspace::linspace;

/// Inputs to one demo run.
///
/// `DemoConfig::default()` reproduces the stock demo: per-point blocks at
/// `[0, 1, 1.5, 2, 2.5]`, then a comparison table over five evenly spaced
/// points from -1 to 3, forward differences with `h = 1e-5`, and the default
/// dataset.
///
/// # Fields
/// - `test_points`  — weights that get a full cost/gradient block each
/// - `sweep_start`  — first weight of the comparison table
/// - `sweep_end`    — last weight of the comparison table (inclusive)
/// - `sweep_points` — number of evenly spaced weights in the table
/// - `step`         — finite-difference step size `h`
/// - `scheme`       — finite-difference formula
/// - `data`         — samples the cost is evaluated over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub test_points: Vec<f64>,
    pub sweep_start: f64,
    pub sweep_end: f64,
    pub sweep_points: usize,
    pub step: f64,
    #[serde(default)]
    pub scheme: Scheme,
    #[serde(default)]
    pub data: Dataset,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            test_points: vec![0.0, 1.0, 1.5, 2.0, 2.5],
            sweep_start: -1.0,
            sweep_end: 3.0,
            sweep_points: 5,
            step: DEFAULT_STEP,
            scheme: Scheme::Forward,
            data: Dataset::default(),
        }
    }
}

impl DemoConfig {
    /// Weights covered by the comparison table.
    pub fn sweep(&self) -> Vec<f64> {
        linspace(self.sweep_start, self.sweep_end, self.sweep_points)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `DemoConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<DemoConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep() {
        assert_eq!(DemoConfig::default().sweep(), vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("grad-check-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap().to_string();

        let config = DemoConfig {
            test_points: vec![0.25],
            step: 0.5,
            scheme: Scheme::Central,
            data: Dataset::new(vec![1.0, -1.0], vec![0.5, 0.5]).unwrap(),
            ..DemoConfig::default()
        };
        config.save_json(&path).unwrap();
        let loaded = DemoConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn omitted_scheme_and_data_fall_back_to_defaults() {
        let json = r#"{"test_points":[1.0],"sweep_start":0.0,"sweep_end":1.0,"sweep_points":2,"step":0.001}"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scheme, Scheme::Forward);
        assert_eq!(config.data, Dataset::default());
    }

    #[test]
    fn invalid_data_is_rejected_on_load() {
        let json = r#"{"test_points":[],"sweep_start":0.0,"sweep_end":1.0,"sweep_points":2,"step":0.001,
                      "data":{"x":[1.0],"y":[]}}"#;
        assert!(serde_json::from_str::<DemoConfig>(json).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DemoConfig::load_json("/nonexistent/grad-check.json").unwrap_err();
        assert!(matches!(err, crate::error::GradError::Io(_)));
    }
}
