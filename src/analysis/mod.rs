//! Color analysis: palette models, target extraction and canvas scoring

/// Canvas coverage and mosaic scoring
pub mod evaluation;
/// First-order color transition model
pub mod markov;
/// Per-food-kind walks through a color model
pub mod palette;
/// Dominant color extraction
pub mod profile;
