//! Colony driver: owns the grid, the ants and the tick loop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::ant::Ant;
use crate::algorithm::selection::{CandidateSelector, SelectionStats};
use crate::analysis::markov::ColorMarkovChain;
use crate::io::configuration::SimulationConfig;
use crate::io::error::{Result, SimulationError};
use crate::math::color::Color;
use crate::spatial::CellGrid;
use crate::spatial::cell::FoodId;
use crate::spatial::direction::{Direction, Position};

/// Where food comes from when a colony is built
#[derive(Clone, Debug)]
pub enum FoodLayout {
    /// Food cells classified from an image against target colors
    Mask {
        /// Source image, cropped to whole cells
        image: RgbImage,
        /// One color per food kind
        targets: Vec<Color>,
    },
    /// Food squares scattered at random on a blank canvas
    Procedural {
        /// Canvas width in pixels
        width: u32,
        /// Canvas height in pixels
        height: u32,
        /// One color per food kind
        targets: Vec<Color>,
    },
}

/// Simulation state advanced one tick at a time
///
/// A tick decays every trail, spawns at most one ant and then updates each ant
/// in spawn order. All randomness comes from one seeded generator, so equal
/// seeds give equal canvases.
#[derive(Debug)]
pub struct Colony {
    grid: CellGrid,
    ants: Vec<Ant>,
    selector: CandidateSelector,
    rng: StdRng,
    ticks: u64,
    faults: u64,
    next_food_id: FoodId,
    stop: Arc<AtomicBool>,
    shut_down: bool,
}

impl Colony {
    /// Build a colony from a food layout and one trained palette per target color
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the palettes do not
    /// match the target colors, or the layout is smaller than one cell
    pub fn build(
        config: SimulationConfig,
        layout: FoodLayout,
        palettes: Vec<ColorMarkovChain>,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = match layout {
            FoodLayout::Mask { image, targets } => {
                CellGrid::from_mask(&image, config, targets, palettes, &mut rng)?
            }
            FoodLayout::Procedural {
                width,
                height,
                targets,
            } => CellGrid::procedural(width, height, config, targets, palettes, &mut rng)?,
        };
        Ok(Self::with_rng(grid, rng))
    }

    /// Wrap a prepared grid
    pub fn from_grid(grid: CellGrid, seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(seed))
    }

    fn with_rng(grid: CellGrid, rng: StdRng) -> Self {
        let selector = CandidateSelector::new(grid.config().selection_seed);
        Self {
            grid,
            ants: Vec::new(),
            selector,
            rng,
            ticks: 0,
            faults: 0,
            next_food_id: 0,
            stop: Arc::new(AtomicBool::new(false)),
            shut_down: false,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// An ant whose update fails is logged and skipped for this tick. Does
    /// nothing after [`Colony::shutdown`].
    pub fn tick(&mut self) {
        if self.shut_down {
            return;
        }
        self.grid.decay_tick();
        self.spawn();

        for (index, ant) in self.ants.iter_mut().enumerate() {
            if let Err(error) = ant.update(&mut self.grid, &mut self.selector, &mut self.rng) {
                self.faults += 1;
                tracing::warn!(
                    tick = self.ticks,
                    ant = index,
                    invariant = error.is_invariant_violation(),
                    "ant update skipped: {error}"
                );
            }
        }
        self.ticks += 1;
    }

    /// Try to add one ant on a random nest cell
    ///
    /// Skips when the population is full, there is no nest or food kind, or
    /// the chosen nest cell is taken. Food kinds are handed out in turn.
    pub fn spawn(&mut self) -> bool {
        if self.ants.len() >= self.grid.config().max_ants {
            return false;
        }
        let kinds = self.grid.food_kinds();
        let nests = self.grid.nests();
        if nests.is_empty() || kinds == 0 {
            tracing::debug!(nests = nests.len(), kinds, "spawn skipped: nothing to spawn from");
            return false;
        }

        let index = self.rng.random_range(0..nests.len());
        let Some(&position) = nests.get(index) else {
            return false;
        };
        if self.grid.is_occupied(position) {
            tracing::debug!(%position, "spawn skipped: nest cell occupied");
            return false;
        }

        let heading_index = self.rng.random_range(0..Direction::ALL.len());
        let heading = Direction::ALL
            .get(heading_index)
            .copied()
            .unwrap_or(Direction::North);
        let food_id = self.next_food_id % kinds;
        match self.spawn_ant(position, heading, food_id) {
            Ok(()) => {
                self.next_food_id = (food_id + 1) % kinds;
                true
            }
            Err(error) => {
                tracing::warn!("spawn failed: {error}");
                false
            }
        }
    }

    /// Place a new ant on `position`
    ///
    /// # Errors
    ///
    /// Returns `CellOccupied` when another ant stands there and
    /// `UnknownFoodKind` for a food kind without a palette
    pub fn spawn_ant(&mut self, position: Position, heading: Direction, food_id: FoodId) -> Result<()> {
        let kinds = self.grid.food_kinds();
        if food_id >= kinds {
            return Err(SimulationError::UnknownFoodKind {
                food_id,
                known: kinds,
            });
        }
        let config = self.grid.config();
        let ant = Ant::new(
            position,
            heading,
            config.ant_food_capacity,
            food_id,
            config.ant_color,
        );
        self.grid.enter(position, &ant)?;
        self.ants.push(ant);
        Ok(())
    }

    /// Run up to `max_ticks` ticks, calling `on_tick` after each
    ///
    /// Stops early when the stop handle is raised and returns the ticks run.
    pub fn run<F>(&mut self, max_ticks: u64, mut on_tick: F) -> u64
    where
        F: FnMut(&Self),
    {
        let mut ran = 0;
        while ran < max_ticks && !self.stop.load(Ordering::Relaxed) && !self.shut_down {
            self.tick();
            ran += 1;
            on_tick(self);
        }
        ran
    }

    /// Flag that makes [`Colony::run`] return before its next tick
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Current canvas, consistent between ticks
    pub const fn snapshot_pixels(&self) -> &RgbImage {
        self.grid.canvas()
    }

    /// Take every ant off the canvas and erase the nests
    ///
    /// Ants leave in spawn order so their cells get their final colors. Later
    /// calls do nothing.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        for ant in self.ants.drain(..) {
            if let Err(error) = self.grid.leave(ant.position, ant.food_id, &mut self.rng) {
                tracing::warn!("ant could not leave during shutdown: {error}");
            }
        }
        self.grid.erase_nests();
        self.shut_down = true;
        tracing::debug!(ticks = self.ticks, "colony shut down");
    }

    /// Whether [`Colony::shutdown`] has run
    pub const fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Grid state
    pub const fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Live ants in spawn order
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Movement decision counters
    pub const fn selection_stats(&self) -> SelectionStats {
        self.selector.stats()
    }

    /// Ticks run so far
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Ant updates skipped because of errors
    pub const fn faults(&self) -> u64 {
        self.faults
    }
}
