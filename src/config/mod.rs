pub mod demo_config;

pub use demo_config::DemoConfig;
