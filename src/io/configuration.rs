//! Simulation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::math::color::{BLACK, Color};

// Colony
/// Population cap
pub const MAX_ANTS: usize = 100;
/// Food units an ant carries before heading home
pub const ANT_FOOD_CAPACITY: u32 = 100;
/// Movement decisions shuffle their candidates with probability `1 / ANT_SELECTION_SEED`
pub const ANT_SELECTION_SEED: u32 = 5;

// Pheromones
/// Upper bound of the food pheromone channel
pub const MAX_FOOD_PHEROMONE: f32 = 50.0;
/// Upper bound of the home pheromone channel
pub const MAX_HOME_PHEROMONE: f32 = 50.0;
/// Pheromone added by one ant visit
pub const PHEROMONE_GAIN: f32 = 1.0;
/// Fraction of pheromone lost per tick
pub const PHEROMONE_DECAY_RATE: f32 = 0.005;
/// Combined pheromone below which a trail is erased
pub const MINIMUM_PHEROMONE_THRESHOLD: f32 = 0.01;
// Pushes faint trails toward full brightness
/// Multiplier applied to the food pheromone ratio when shading trails
pub const INTENSITY_AMPLIFIER: f32 = 25.0;

// Cells
/// Side length of a cell in pixels
pub const CELL_SIZE: u32 = 4;
/// Share of a cell's pixels that must match a target color to make it food
pub const TYPE_IDENTIFICATION_THRESHOLD: f32 = 0.5;
/// Food units in a freshly classified food cell
pub const DEFAULT_FOOD_IN_CELL: u32 = 5;
/// Nest squares placed on the grid
pub const NEST_CELLS_TO_SPAWN: usize = 1;
/// Side length of a nest square in cells
pub const NEST_AREA_SIZE: usize = 5;
/// Food squares placed on a procedural grid
pub const FOOD_CELLS_TO_SPAWN: usize = 20;
/// Side length of a procedural food square in cells
pub const FOOD_AREA_SIZE: usize = 1;

// Colors
/// Per-channel tolerance when comparing colors
pub const COLOR_SIMILARITY_THRESHOLD: u8 = 50;
/// Canvas background
pub const BACKGROUND_COLOR: Color = BLACK;
/// Nest cells
pub const NEST_COLOR: Color = [0, 255, 0];
/// Ants
pub const ANT_COLOR: Color = [0, 0, 255];
/// Number of target colors extracted from an input image
pub const DEFAULT_TARGET_COLOR_COUNT: usize = 2;
/// Colors covering at least this share of the image are treated as backdrop
pub const COLOR_FILTERING_HIGHER_LIMIT: f32 = 0.5;
/// Colors covering less than this share of the image are noise
pub const COLOR_FILTERING_LOWER_LIMIT: f32 = 0.05;

// Runs
/// Fixed seed for reproducible runs
pub const DEFAULT_SEED: u64 = 42;
/// Ticks simulated per input image
pub const DEFAULT_TICKS: u64 = 1350;
/// Ticks between canvas snapshots
pub const DEFAULT_SAMPLE_INTERVAL: u64 = 225;
/// Largest image side accepted before rescaling
pub const MAXIMUM_IMAGE_SIZE: u32 = 520;

// Outputs
/// Delay between snapshot frames in the output GIF
pub const OUTPUT_GIF_DELAY_MS: u32 = 250;
/// Suffix of the raw canvas export
pub const RAW_SUFFIX: &str = "_raw";
/// Suffix of the oil painted export
pub const OIL_PAINTED_SUFFIX: &str = "_oil_painted";
/// Directory for snapshot animations, relative to the output directory
pub const GIF_RELATIVE: &str = "gifs";
/// Directory for raw canvases, relative to the output directory
pub const RAW_RELATIVE: &str = "raw";
/// Directory for filtered canvases, relative to the output directory
pub const OIL_PAINTED_RELATIVE: &str = "oil_painted";
/// Image format of still outputs
pub const IMG_FORMAT: &str = "jpg";

// Oil painting filter
/// Neighborhood radius in pixels
pub const OIL_PAINTING_RADIUS: u32 = 5;
/// Number of brightness buckets
pub const OIL_PAINTING_INTENSITY_LEVELS: usize = 24;

// Evaluation
/// Neighborhood radius when scoring mosaic texture
pub const MOSAIC_NEIGHBORHOOD: u32 = 3;
/// Share of differing neighbors that makes a pixel part of a mosaic
pub const MOSAIC_THRESHOLD: f32 = 0.5;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Numeric knobs consumed by the simulation engine
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Side length of a cell in pixels
    pub cell_size: u32,
    /// Population cap
    pub max_ants: usize,
    /// Food units an ant carries before heading home
    pub ant_food_capacity: u32,
    /// Shuffle probability denominator for movement decisions
    pub selection_seed: u32,
    /// Upper bound of the food pheromone channel
    pub max_food_pheromone: f32,
    /// Upper bound of the home pheromone channel
    pub max_home_pheromone: f32,
    /// Pheromone added by one ant visit
    pub pheromone_gain: f32,
    /// Fraction of pheromone lost per tick
    pub pheromone_decay_rate: f32,
    /// Combined pheromone below which a trail is erased
    pub minimum_pheromone_threshold: f32,
    /// Trail brightness multiplier
    pub intensity_amplifier: f32,
    /// Share of matching pixels that makes a cell food
    pub type_identification_threshold: f32,
    /// Food units in a fresh food cell
    pub food_per_cell: u32,
    /// Nest squares placed on the grid
    pub nest_count: usize,
    /// Side length of a nest square in cells
    pub nest_area_size: usize,
    /// Food squares placed on a procedural grid
    pub food_area_count: usize,
    /// Side length of a procedural food square in cells
    pub food_area_size: usize,
    /// Per-channel color tolerance
    pub color_similarity_threshold: u8,
    /// Canvas background
    pub background_color: Color,
    /// Nest cells
    pub nest_color: Color,
    /// Ants
    pub ant_color: Color,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            max_ants: MAX_ANTS,
            ant_food_capacity: ANT_FOOD_CAPACITY,
            selection_seed: ANT_SELECTION_SEED,
            max_food_pheromone: MAX_FOOD_PHEROMONE,
            max_home_pheromone: MAX_HOME_PHEROMONE,
            pheromone_gain: PHEROMONE_GAIN,
            pheromone_decay_rate: PHEROMONE_DECAY_RATE,
            minimum_pheromone_threshold: MINIMUM_PHEROMONE_THRESHOLD,
            intensity_amplifier: INTENSITY_AMPLIFIER,
            type_identification_threshold: TYPE_IDENTIFICATION_THRESHOLD,
            food_per_cell: DEFAULT_FOOD_IN_CELL,
            nest_count: NEST_CELLS_TO_SPAWN,
            nest_area_size: NEST_AREA_SIZE,
            food_area_count: FOOD_CELLS_TO_SPAWN,
            food_area_size: FOOD_AREA_SIZE,
            color_similarity_threshold: COLOR_SIMILARITY_THRESHOLD,
            background_color: BACKGROUND_COLOR,
            nest_color: NEST_COLOR,
            ant_color: ANT_COLOR,
        }
    }
}

impl SimulationConfig {
    /// Check that every knob is positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first knob that is zero, negative
    /// or not finite, or a decay rate above 1
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("cell_size", self.cell_size as usize),
            ("max_ants", self.max_ants),
            ("ant_food_capacity", self.ant_food_capacity as usize),
            ("selection_seed", self.selection_seed as usize),
            ("food_per_cell", self.food_per_cell as usize),
            ("nest_count", self.nest_count),
            ("nest_area_size", self.nest_area_size),
            ("food_area_size", self.food_area_size),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(invalid_parameter(name, &value, &"must be positive"));
            }
        }

        let levels = [
            ("max_food_pheromone", self.max_food_pheromone),
            ("max_home_pheromone", self.max_home_pheromone),
            ("pheromone_gain", self.pheromone_gain),
            ("pheromone_decay_rate", self.pheromone_decay_rate),
            (
                "minimum_pheromone_threshold",
                self.minimum_pheromone_threshold,
            ),
            ("intensity_amplifier", self.intensity_amplifier),
            (
                "type_identification_threshold",
                self.type_identification_threshold,
            ),
        ];
        for (name, value) in levels {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_parameter(name, &value, &"must be positive"));
            }
        }

        if self.pheromone_decay_rate > 1.0 {
            return Err(invalid_parameter(
                "pheromone_decay_rate",
                &self.pheromone_decay_rate,
                &"cannot remove more than everything per tick",
            ));
        }

        Ok(())
    }
}
