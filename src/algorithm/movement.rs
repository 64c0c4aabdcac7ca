//! Forward-biased candidate ranking for ant moves

use rand::Rng;
use std::cmp::Reverse;

use crate::algorithm::selection::CandidateSelector;
use crate::spatial::CellGrid;
use crate::spatial::cell::{Cell, CellKind, FoodId};
use crate::spatial::direction::{Direction, Position};

/// Where an ant is heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
    /// Food sources of one kind, followed by the food trail
    Food(FoodId),
    /// Any nest, followed by the home trail
    Nest,
}

impl Goal {
    /// Whether `cell` is a destination for this goal
    pub const fn is_reached_by(self, cell: &Cell) -> bool {
        match self {
            Self::Food(food_id) => cell.is_food_for(food_id),
            Self::Nest => cell.kind.is_nest(),
        }
    }

    /// Strength of the trail this goal follows on `cell`
    pub const fn trail(self, cell: &Cell) -> f32 {
        match self {
            Self::Food(_) => cell.food_pheromone,
            Self::Nest => cell.home_pheromone,
        }
    }
}

/// Order the three forward cells for an ant at `from` facing `heading`
///
/// Free goal cells come first and alone, richest food first. Without one, all
/// three candidates are ranked by descending trail strength with ties kept in
/// ahead, counter-clockwise, clockwise order. Either list gets exactly one
/// shuffle roll. Callers try the cells in order and skip occupied ones.
pub fn rank_candidates<R: Rng + ?Sized>(
    grid: &CellGrid,
    from: Position,
    heading: Direction,
    goal: Goal,
    selector: &mut CandidateSelector,
    rng: &mut R,
) -> Vec<Position> {
    let candidates: Vec<(Position, Cell)> = heading
        .forward_fan()
        .into_iter()
        .map(|direction| grid.neighbor(from, direction))
        .filter_map(|position| grid.cell(position).map(|cell| (position, *cell)))
        .collect();

    let mut goals: Vec<(Position, Cell)> = candidates
        .iter()
        .filter(|(position, cell)| goal.is_reached_by(cell) && !grid.is_occupied(*position))
        .copied()
        .collect();

    let mut ranked = if goals.is_empty() {
        let mut ranked = candidates;
        ranked.sort_by(|(_, a), (_, b)| goal.trail(b).total_cmp(&goal.trail(a)));
        ranked
    } else {
        goals.sort_by_key(|(_, cell)| Reverse(remaining_food(cell)));
        goals
    };

    selector.maybe_shuffle(&mut ranked, rng);
    ranked.into_iter().map(|(position, _)| position).collect()
}

const fn remaining_food(cell: &Cell) -> u32 {
    match cell.kind {
        CellKind::Food { remaining, .. } => remaining,
        _ => 0,
    }
}
