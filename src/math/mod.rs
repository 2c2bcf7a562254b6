pub mod linspace;

pub use linspace::linspace;
