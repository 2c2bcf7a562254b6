pub mod point_report;
pub mod comparison;
pub mod demo;

pub use point_report::{write_point_report, PointReport};
pub use comparison::{compare, compare_gradients, write_comparison, ComparisonRow};
pub use demo::run_demo;
