pub mod capture_config;
pub mod defaults;

pub use capture_config::{CaptureConfig, DetectionConfig};
