use crate::math::color::Color;
use std::collections::HashMap;
use std::collections::BTreeMap;

/// Cumulative-weight lookup table for one source color
///
/// Entries are `(running total, neighbor color)` in ascending total order, so
/// a draw in `1..=total` maps to exactly one neighbor in proportion to its count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CumulativeTable {
    entries: Vec<(u64, Color)>,
}

impl CumulativeTable {
    /// Build a table from neighbor counts, skipping zero counts
    pub fn from_counts(counts: &BTreeMap<Color, u64>) -> Self {
        let mut running = 0;
        let entries = counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&color, &count)| {
                running += count;
                (running, color)
            })
            .collect();
        Self { entries }
    }

    /// Sum of all weights
    pub fn total(&self) -> u64 {
        self.entries.last().map_or(0, |&(total, _)| total)
    }

    /// Whether the table has no weight at all
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at the smallest running total `>= draw`
    ///
    /// Returns `None` for draws outside `1..=total`.
    pub fn lookup(&self, draw: u64) -> Option<Color> {
        if draw == 0 {
            return None;
        }
        let index = self.entries.partition_point(|&(cumulative, _)| cumulative < draw);
        self.entries.get(index).map(|&(_, color)| color)
    }
}

/// Memoization cache for per-color selection tables
///
/// Tables are built on first request and kept until the owning model is
/// retrained.
#[derive(Default, Debug, Clone)]
pub struct SelectorCache {
    /// Source color to selection table mapping
    tables: HashMap<Color, CumulativeTable>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl SelectorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached table or compute and store a new one
    pub fn get_or_compute<F>(&mut self, color: Color, compute_fn: F) -> &CumulativeTable
    where
        F: FnOnce() -> CumulativeTable,
    {
        use std::collections::hash_map::Entry;

        match self.tables.entry(color) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been built yet
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Drop every table and reset the statistics
    pub fn clear(&mut self) {
        self.tables.clear();
        self.stats = CacheStats::default();
    }
}
