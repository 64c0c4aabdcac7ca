//! First-order color transition model learned from a palette image
//!
//! Every pixel votes for each color in its 3x3 neighborhood (itself included,
//! clipped at the image border). Sampling a neighbor of a color then follows
//! those vote counts, so walks through the model reproduce the palette's local
//! color structure.

use crate::algorithm::cache::{CacheStats, CumulativeTable, SelectorCache};
use crate::math::color::{Color, from_pixel, is_similar};
use image::RgbImage;
use rand::Rng;
use std::collections::BTreeMap;

/// Weighted color adjacency graph with cached sampling tables
#[derive(Clone, Debug, Default)]
pub struct ColorMarkovChain {
    /// Source color to neighbor color counts
    transitions: BTreeMap<Color, BTreeMap<Color, u64>>,
    /// Colors seen as pixels, in first-seen order
    colors: Vec<Color>,
    /// Per-color cumulative tables
    cache: SelectorCache,
    /// Per-channel tolerance for excluded colors
    tolerance: u8,
}

impl ColorMarkovChain {
    /// Create an untrained model that excludes colors within `tolerance`
    pub fn new(tolerance: u8) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Create a model trained on `image`
    pub fn trained(image: &RgbImage, excluded: &[Color], tolerance: u8) -> Self {
        let mut chain = Self::new(tolerance);
        chain.train(image, excluded);
        chain
    }

    /// Forget everything and learn transitions from `image`
    ///
    /// Pixels similar to any of `excluded` neither vote nor receive votes.
    pub fn train(&mut self, image: &RgbImage, excluded: &[Color]) {
        self.transitions.clear();
        self.colors.clear();
        self.cache.clear();

        let (width, height) = image.dimensions();
        let tolerance = self.tolerance;
        let is_excluded = |color: Color| excluded.iter().any(|&e| is_similar(e, color, tolerance));

        for y in 0..height {
            for x in 0..width {
                let source = from_pixel(*image.get_pixel(x, y));
                if is_excluded(source) {
                    continue;
                }
                if !self.transitions.contains_key(&source) {
                    self.colors.push(source);
                }
                let counts = self.transitions.entry(source).or_default();

                let rows = y.saturating_sub(1)..=(y + 1).min(height - 1);
                for ny in rows {
                    for nx in x.saturating_sub(1)..=(x + 1).min(width - 1) {
                        let neighbor = from_pixel(*image.get_pixel(nx, ny));
                        if !is_excluded(neighbor) {
                            *counts.entry(neighbor).or_insert(0) += 1;
                        }
                    }
                }
            }
        }
    }

    /// Whether the model has seen any color
    pub const fn is_trained(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Colors seen as pixels during training
    pub const fn colors(&self) -> &[Color] {
        self.colors.as_slice()
    }

    /// Neighbor counts recorded for `color`
    pub fn neighbor_counts(&self, color: Color) -> Option<&BTreeMap<Color, u64>> {
        self.transitions.get(&color)
    }

    /// Hit and miss counts of the selection table cache
    pub const fn cache_stats(&self) -> CacheStats {
        self.cache.stats
    }

    /// Draw a color uniformly among the colors seen as pixels
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.colors.len());
        self.colors.get(index).copied()
    }

    /// Draw a neighbor of `color` with probability proportional to its count
    ///
    /// The draw is uniform over `1..=total` and picks the first running total at
    /// or above it, so every neighbor's chance is exactly its count over the
    /// total. Drawing from `0..total` instead would give the first neighbor one
    /// extra slot.
    ///
    /// Returns `None` when `color` was never seen or has no neighbors.
    pub fn random_neighbor<R: Rng + ?Sized>(&mut self, color: Color, rng: &mut R) -> Option<Color> {
        let counts = self.transitions.get(&color)?;
        let table = self
            .cache
            .get_or_compute(color, || CumulativeTable::from_counts(counts));
        if table.is_empty() {
            return None;
        }
        let draw = rng.random_range(1..=table.total());
        table.lookup(draw)
    }
}
