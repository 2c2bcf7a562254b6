pub mod error;
pub mod data;
pub mod math;
pub mod loss;
pub mod grad;
pub mod config;
pub mod report;

// Convenience re-exports
pub use error::{GradError, Result};
pub use data::dataset::Dataset;
pub use math::linspace::linspace;
pub use loss::mse::{cost_function, MseLoss};
pub use grad::numerical::{central_gradient, numerical_gradient, DEFAULT_STEP};
pub use grad::analytical::{analytical_gradient, AnalyticalGradient};
pub use grad::scheme::Scheme;
pub use config::demo_config::DemoConfig;
pub use report::comparison::{compare, compare_gradients, ComparisonRow};
pub use report::demo::run_demo;
