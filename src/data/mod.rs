pub mod dataset;

pub use dataset::{Dataset, DEFAULT_X, DEFAULT_Y};
