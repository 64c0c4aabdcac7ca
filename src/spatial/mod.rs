//! Spatial data structures for the simulated canvas
//!
//! This module contains spatial-related functionality including:
//! - Cell content and pheromone state
//! - Compass headings and torus coordinates
//! - Occupancy tracking
//! - The grid that ties cells to canvas pixels

/// Per-cell content and pheromone state
pub mod cell;
/// Compass headings and torus coordinates
pub mod direction;
/// Cell grid, its canvas and the operations ants perform on it
pub mod grid;
/// One-bit-per-cell ant occupancy
pub mod occupancy;

pub use grid::CellGrid;
