//! Foraging agent state machine

use rand::Rng;

use crate::algorithm::movement::{Goal, rank_candidates};
use crate::algorithm::selection::CandidateSelector;
use crate::io::error::{Result, invalid_parameter};
use crate::math::color::Color;
use crate::spatial::CellGrid;
use crate::spatial::cell::{CellKind, FoodId};
use crate::spatial::direction::{Direction, Position};

/// One forager bound to a single food kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    /// Cell the ant stands on
    pub position: Position,
    /// Facing, kept across ticks and flipped when the load state flips
    pub heading: Direction,
    /// Food units carried
    pub carried: u32,
    /// Units that make the ant laden
    pub capacity: u32,
    /// Food kind this ant harvests, fixed for life
    pub food_id: FoodId,
    /// Paint used while the ant stands on a cell
    pub color: Color,
    reversals: u32,
}

impl Ant {
    /// Create an empty-handed ant
    pub const fn new(
        position: Position,
        heading: Direction,
        capacity: u32,
        food_id: FoodId,
        color: Color,
    ) -> Self {
        Self {
            position,
            heading,
            carried: 0,
            capacity,
            food_id,
            color,
            reversals: 0,
        }
    }

    /// Whether the ant is full and heading home
    pub const fn is_laden(&self) -> bool {
        self.carried >= self.capacity
    }

    /// Number of times the heading was flipped
    pub const fn heading_reversals(&self) -> u32 {
        self.reversals
    }

    const fn reverse(&mut self) {
        self.heading = self.heading.reverse();
        self.reversals += 1;
    }

    /// Advance the ant by one tick
    ///
    /// 1. Laden on a nest: drop everything, turn around, look for food.
    /// 2. Laden elsewhere: look for a nest.
    /// 3. Empty-handed on its own food: take one unit; if that fills it, turn
    ///    around and look for a nest.
    /// 4. Otherwise: look for food.
    ///
    /// # Errors
    ///
    /// Returns the grid's invariant violation when a pickup, deposit or move
    /// breaks a cell contract. The ant's position stays consistent with the grid.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        grid: &mut CellGrid,
        selector: &mut CandidateSelector,
        rng: &mut R,
    ) -> Result<()> {
        let kind = grid
            .cell(self.position)
            .map(|cell| cell.kind)
            .ok_or_else(|| invalid_parameter("position", &self.position, &"outside the grid"))?;

        if self.is_laden() {
            if kind.is_nest() {
                grid.deposit(self.position, self.carried)?;
                self.carried = 0;
                self.reverse();
                self.advance(grid, Goal::Food(self.food_id), selector, rng)?;
            } else {
                self.advance(grid, Goal::Nest, selector, rng)?;
            }
        } else if matches!(kind, CellKind::Food { food_id, .. } if food_id == self.food_id) {
            grid.pick_up(self.position, self.food_id, rng)?;
            self.carried += 1;
            if self.is_laden() {
                self.reverse();
                self.advance(grid, Goal::Nest, selector, rng)?;
            }
        } else {
            self.advance(grid, Goal::Food(self.food_id), selector, rng)?;
        }
        Ok(())
    }

    // Returns whether the ant moved; staying put is a valid outcome
    fn advance<R: Rng + ?Sized>(
        &mut self,
        grid: &mut CellGrid,
        goal: Goal,
        selector: &mut CandidateSelector,
        rng: &mut R,
    ) -> Result<bool> {
        let ranked = rank_candidates(grid, self.position, self.heading, goal, selector, rng);
        for destination in ranked {
            if self.move_to(grid, destination, rng)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn move_to<R: Rng + ?Sized>(
        &mut self,
        grid: &mut CellGrid,
        destination: Position,
        rng: &mut R,
    ) -> Result<bool> {
        if grid.is_occupied(destination) {
            return Ok(false);
        }
        grid.leave(self.position, self.food_id, rng)?;
        grid.enter(destination, self)?;
        self.position = destination;
        Ok(true)
    }
}
