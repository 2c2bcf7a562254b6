pub mod numerical;
pub mod analytical;
pub mod scheme;

pub use numerical::{central_gradient, default_numerical_gradient, numerical_gradient, DEFAULT_STEP};
pub use analytical::{analytical_gradient, AnalyticalGradient};
pub use scheme::Scheme;
