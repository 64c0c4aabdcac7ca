//! Ant colony simulation that repaints images with colors sampled from palettes
//!
//! Foraging ants walk a torus of cells, lay home and food trails, and carry food
//! from sources to nests. Every cell an ant walks off is repainted with the next
//! color of a Markov walk learned from a palette image, so trails gradually turn
//! the input's shapes into textured pixel art.

#![forbid(unsafe_code)]

/// Colony driver, ant state machine and movement decisions
pub mod algorithm;
/// Color models, target color extraction and canvas scoring
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color and pheromone arithmetic
pub mod math;
/// Cells, headings, occupancy and the canvas grid
pub mod spatial;

pub use io::error::{Result, SimulationError};
