//! Per-cell content and pheromone state

use crate::math::color::Color;

/// Index of a food kind, which is also the index of its target color and palette
pub type FoodId = usize;

/// What a cell holds
///
/// Fields only exist on the variants they make sense for, so a default cell
/// can never carry a food kind and a nest can never run out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Open ground that shows decaying trails
    Default {
        /// Last color drawn for this cell, used to shade the trail
        color: Option<Color>,
    },
    /// Where ants spawn and drop their food
    Nest {
        /// Food delivered so far
        stored: u64,
    },
    /// Harvestable food bound to one target color
    Food {
        /// Food kind of this source
        food_id: FoodId,
        /// Units left before the source is exhausted
        remaining: u32,
    },
    /// Exhausted food source, permanently holding its painted color
    Site {
        /// Food kind the source belonged to
        food_id: FoodId,
        /// Color chosen when the last unit was picked up
        color: Color,
    },
}

impl CellKind {
    /// Open ground with no color drawn yet
    pub const EMPTY: Self = Self::Default { color: None };

    /// Whether this is open ground
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default { .. })
    }

    /// Whether this is a nest
    pub const fn is_nest(&self) -> bool {
        matches!(self, Self::Nest { .. })
    }

    /// Whether this is a food source of any kind
    pub const fn is_food(&self) -> bool {
        matches!(self, Self::Food { .. })
    }

    /// Whether this is an exhausted food source
    pub const fn is_site(&self) -> bool {
        matches!(self, Self::Site { .. })
    }

    /// Food kind of a food source or site
    pub const fn food_id(&self) -> Option<FoodId> {
        match self {
            Self::Food { food_id, .. } | Self::Site { food_id, .. } => Some(*food_id),
            Self::Default { .. } | Self::Nest { .. } => None,
        }
    }

    /// Food units held: remaining on a source, stored in a nest, zero elsewhere
    pub const fn food(&self) -> u64 {
        match self {
            Self::Food { remaining, .. } => *remaining as u64,
            Self::Nest { stored } => *stored,
            Self::Default { .. } | Self::Site { .. } => 0,
        }
    }
}

/// One tile of the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Content of the cell
    pub kind: CellKind,
    /// Trail strength toward the nest
    pub home_pheromone: f32,
    /// Trail strength toward food
    pub food_pheromone: f32,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(CellKind::EMPTY)
    }
}

impl Cell {
    /// Create a cell with no pheromone
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            home_pheromone: 0.0,
            food_pheromone: 0.0,
        }
    }

    /// Combined strength of both channels
    pub fn total_pheromone(&self) -> f32 {
        self.home_pheromone + self.food_pheromone
    }

    /// Whether this is a food source an ant of `food_id` may harvest
    pub const fn is_food_for(&self, food_id: FoodId) -> bool {
        matches!(self.kind, CellKind::Food { food_id: id, .. } if id == food_id)
    }
}
