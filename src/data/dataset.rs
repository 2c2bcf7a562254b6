use serde::{Deserialize, Serialize};

use crate::error::{GradError, Result};

/// Feature vector used whenever the caller omits `x`.
pub const DEFAULT_X: [f64; 3] = [1.0, 2.0, 3.0];

/// Target vector used whenever the caller omits `y`.
pub const DEFAULT_Y: [f64; 3] = [2.0, 4.0, 6.0];

/// Paired feature/target samples for the model `ŷ = w·x`.
///
/// Construction goes through [`Dataset::new`], so every `Dataset` in
/// circulation has `x.len() == y.len() > 0`. Deserialization is routed
/// through the same check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset")]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Deserialize)]
struct RawDataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = GradError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.x, raw.y)
    }
}

impl Dataset {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Dataset> {
        if x.len() != y.len() {
            return Err(GradError::LengthMismatch { x_len: x.len(), y_len: y.len() });
        }
        if x.is_empty() {
            return Err(GradError::EmptyDataset);
        }
        Ok(Dataset { x, y })
    }

    /// Builds a dataset from optional vectors, substituting `DEFAULT_X` /
    /// `DEFAULT_Y` for whichever side is `None`.
    pub fn with_defaults(x: Option<&[f64]>, y: Option<&[f64]>) -> Result<Dataset> {
        let x = x.map_or_else(|| DEFAULT_X.to_vec(), <[f64]>::to_vec);
        let y = y.map_or_else(|| DEFAULT_Y.to_vec(), <[f64]>::to_vec);
        Dataset::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `false` for any constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates `(x_i, y_i)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset { x: DEFAULT_X.to_vec(), y: DEFAULT_Y.to_vec() }
    }
}
