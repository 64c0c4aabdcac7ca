//! Input/output: files, images, progress, configuration and errors

/// Command-line interface and batch file processing
pub mod cli;
/// Simulation constants and runtime configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, rescaling and saving
pub mod image;
/// Oil painting post-filter
pub mod painting;
/// Progress bars for batch runs
pub mod progress;
/// Canvas snapshots and GIF export
pub mod visualization;
