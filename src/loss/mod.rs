pub mod mse;

pub use mse::{cost_function, MseLoss};
