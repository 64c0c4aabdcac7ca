pub mod configuration;
pub mod error;
pub mod painting;
pub mod progress;
