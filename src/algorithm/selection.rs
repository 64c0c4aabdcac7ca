use rand::Rng;
use rand::seq::SliceRandom;

/// Counters for movement decisions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionStats {
    /// Decision points reached
    pub decisions: u64,
    /// Decisions whose candidate order was shuffled
    pub shuffles: u64,
}

/// Randomizes candidate order at movement decision points
///
/// Each decision rolls once; with probability `1 / selection_seed` the
/// candidates are shuffled, which keeps ants from locking onto a single trail.
#[derive(Clone, Debug)]
pub struct CandidateSelector {
    selection_seed: u32,
    stats: SelectionStats,
}

impl CandidateSelector {
    /// Create a selector shuffling with probability `1 / selection_seed`
    ///
    /// A seed of zero never shuffles.
    pub const fn new(selection_seed: u32) -> Self {
        Self {
            selection_seed,
            stats: SelectionStats {
                decisions: 0,
                shuffles: 0,
            },
        }
    }

    /// Roll once and shuffle `candidates` on a hit
    ///
    /// Returns whether the candidates were shuffled.
    pub fn maybe_shuffle<T, R: Rng + ?Sized>(&mut self, candidates: &mut [T], rng: &mut R) -> bool {
        self.stats.decisions += 1;
        let hit = self.selection_seed > 0 && rng.random_range(0..self.selection_seed) == 0;
        if hit {
            candidates.shuffle(rng);
            self.stats.shuffles += 1;
        }
        hit
    }

    /// Decision counters so far
    pub const fn stats(&self) -> SelectionStats {
        self.stats
    }
}
