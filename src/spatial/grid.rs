//! Torus of cells backing the canvas
//!
//! Cells live in a row-major `ndarray` arena indexed by `[y, x]`. The grid also
//! owns the canvas pixels, the occupancy bits and one palette walker per food
//! kind, so every state change and its repaint happen in one place.

use image::RgbImage;
use ndarray::Array2;
use rand::Rng;

use crate::algorithm::ant::Ant;
use crate::analysis::markov::ColorMarkovChain;
use crate::analysis::palette::PaletteWalker;
use crate::io::configuration::SimulationConfig;
use crate::io::error::{Result, SimulationError, invalid_parameter, invalid_source};
use crate::math::color::{Color, from_pixel, is_similar, scale, to_pixel};
use crate::math::pheromone::{decay, intensity, reinforce};
use crate::spatial::cell::{Cell, CellKind, FoodId};
use crate::spatial::direction::{Direction, Position};
use crate::spatial::occupancy::OccupancyMap;

/// Grid of cells, their occupancy and the canvas they paint
#[derive(Debug, Clone)]
pub struct CellGrid {
    /// Cell arena, shape `(height, width)`
    cells: Array2<Cell>,
    /// Which cells hold an ant
    occupancy: OccupancyMap,
    /// Pixel buffer, `cell_size` pixels per cell side
    canvas: RgbImage,
    /// Color walk per food kind
    palettes: Vec<PaletteWalker>,
    /// Target color per food kind
    targets: Vec<Color>,
    /// Nest cells in placement order
    nests: Vec<Position>,
    /// Engine knobs
    config: SimulationConfig,
}

impl CellGrid {
    /// Create a grid of open ground on a background canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an empty grid, an invalid configuration
    /// or a palette count that does not match the target colors
    pub fn new(
        width: usize,
        height: usize,
        config: SimulationConfig,
        targets: Vec<Color>,
        palettes: Vec<ColorMarkovChain>,
    ) -> Result<Self> {
        config.validate()?;
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "grid_size",
                &format!("{width}x{height}"),
                &"grid needs at least one cell",
            ));
        }
        if targets.len() != palettes.len() {
            return Err(invalid_parameter(
                "palettes",
                &palettes.len(),
                &format!("expected one palette per target color ({})", targets.len()),
            ));
        }

        let canvas = RgbImage::from_pixel(
            width as u32 * config.cell_size,
            height as u32 * config.cell_size,
            to_pixel(config.background_color),
        );

        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::default()),
            occupancy: OccupancyMap::new(width, height),
            canvas,
            palettes: palettes.into_iter().map(PaletteWalker::new).collect(),
            targets,
            nests: Vec::new(),
            config,
        })
    }

    /// Classify cells of `mask` as food and place nests
    ///
    /// A cell becomes food of the target it matches best when more than
    /// `type_identification_threshold` of its pixels are similar to that target.
    /// The canvas starts as the cropped mask with food cells in target colors.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` when the mask is smaller than one cell, or the
    /// errors of [`CellGrid::new`]
    pub fn from_mask<R: Rng + ?Sized>(
        mask: &RgbImage,
        config: SimulationConfig,
        targets: Vec<Color>,
        palettes: Vec<ColorMarkovChain>,
        rng: &mut R,
    ) -> Result<Self> {
        let cell_size = config.cell_size.max(1);
        let width = (mask.width() / cell_size) as usize;
        let height = (mask.height() / cell_size) as usize;
        if width == 0 || height == 0 {
            return Err(invalid_source(&format!(
                "mask {}x{} is smaller than one {cell_size}px cell",
                mask.width(),
                mask.height()
            )));
        }

        let mut grid = Self::new(width, height, config, targets, palettes)?;
        for (x, y, pixel) in grid.canvas.enumerate_pixels_mut() {
            if let Some(source) = mask.get_pixel_checked(x, y) {
                *pixel = *source;
            }
        }

        let remaining = grid.config.food_per_cell;
        let mut food_cells = 0;
        for y in 0..height {
            for x in 0..width {
                let position = Position::new(x, y);
                if let Some(food_id) = grid.classify(mask, position) {
                    grid.set_kind(position, CellKind::Food { food_id, remaining })?;
                    food_cells += 1;
                }
            }
        }
        tracing::info!(food_cells, total_cells = width * height, "classified mask");

        grid.place_nests(rng)?;
        Ok(grid)
    }

    /// Create a blank grid with scattered food squares and nests
    ///
    /// `width` and `height` are canvas pixels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when there are no target colors or the
    /// canvas is smaller than one cell, or the errors of [`CellGrid::new`]
    pub fn procedural<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        config: SimulationConfig,
        targets: Vec<Color>,
        palettes: Vec<ColorMarkovChain>,
        rng: &mut R,
    ) -> Result<Self> {
        if targets.is_empty() {
            return Err(invalid_parameter(
                "targets",
                &0,
                &"procedural food needs at least one target color",
            ));
        }
        let cell_size = config.cell_size.max(1);
        let mut grid = Self::new(
            (width / cell_size) as usize,
            (height / cell_size) as usize,
            config,
            targets,
            palettes,
        )?;
        grid.place_nests(rng)?;
        grid.scatter_food(rng)?;
        Ok(grid)
    }

    fn classify(&self, mask: &RgbImage, position: Position) -> Option<FoodId> {
        let size = self.config.cell_size;
        let x0 = position.x as u32 * size;
        let y0 = position.y as u32 * size;
        let tolerance = self.config.color_similarity_threshold;

        let mut matches = vec![0_u32; self.targets.len()];
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                let Some(pixel) = mask.get_pixel_checked(x, y) else {
                    continue;
                };
                let color = from_pixel(*pixel);
                for (count, &target) in matches.iter_mut().zip(&self.targets) {
                    if is_similar(target, color, tolerance) {
                        *count += 1;
                    }
                }
            }
        }

        let area = (size * size) as f32;
        matches
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count as f32 / area > self.config.type_identification_threshold)
            .max_by_key(|&(food_id, &count)| (count, std::cmp::Reverse(food_id)))
            .map(|(food_id, _)| food_id)
    }

    /// Stamp `nest_count` nest squares at random corners, clipped at the edges
    ///
    /// # Errors
    ///
    /// Propagates failures from [`CellGrid::set_kind`]
    pub fn place_nests<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        for _ in 0..self.config.nest_count {
            let corner = self.random_position(rng);
            let size = self.config.nest_area_size;
            for position in self.square(corner, size) {
                self.set_kind(position, CellKind::Nest { stored: 0 })?;
            }
        }
        Ok(())
    }

    /// Stamp `food_area_count` food squares of random kinds, clipped at the edges
    ///
    /// Nest cells are left alone.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`CellGrid::set_kind`]
    pub fn scatter_food<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if self.targets.is_empty() {
            return Ok(());
        }
        let remaining = self.config.food_per_cell;
        for _ in 0..self.config.food_area_count {
            let corner = self.random_position(rng);
            let food_id = rng.random_range(0..self.targets.len());
            let size = self.config.food_area_size;
            for position in self.square(corner, size) {
                if self.cell(position).is_some_and(|cell| cell.kind.is_nest()) {
                    continue;
                }
                self.set_kind(position, CellKind::Food { food_id, remaining })?;
            }
        }
        Ok(())
    }

    fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(
            rng.random_range(0..self.width()),
            rng.random_range(0..self.height()),
        )
    }

    fn square(&self, corner: Position, size: usize) -> Vec<Position> {
        let x_end = (corner.x + size).min(self.width());
        let y_end = (corner.y + size).min(self.height());
        (corner.y..y_end)
            .flat_map(|y| (corner.x..x_end).map(move |x| Position::new(x, y)))
            .collect()
    }

    /// Replace the content of a cell and repaint it
    ///
    /// Pheromones are kept. Nests are recorded for spawning.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a position outside the grid and
    /// `UnknownFoodKind` for food without a target color
    pub fn set_kind(&mut self, position: Position, kind: CellKind) -> Result<()> {
        let paint = self.kind_color(&kind)?;
        let cell = self.cell_mut(position)?;
        let was_nest = cell.kind.is_nest();
        cell.kind = kind;

        if kind.is_nest() && !was_nest {
            self.nests.push(position);
        } else if was_nest && !kind.is_nest() {
            self.nests.retain(|&nest| nest != position);
        }
        if let Some(color) = paint {
            self.paint(position, color);
        }
        Ok(())
    }

    fn kind_color(&self, kind: &CellKind) -> Result<Option<Color>> {
        Ok(match *kind {
            CellKind::Default { .. } => Some(self.config.background_color),
            CellKind::Nest { .. } => Some(self.config.nest_color),
            CellKind::Food { food_id, .. } => Some(self.target_color(food_id)?),
            CellKind::Site { color, .. } => Some(color),
        })
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Engine knobs this grid was built with
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Cell at `position`, if inside the grid
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get((position.y, position.x))
    }

    fn cell_mut(&mut self, position: Position) -> Result<&mut Cell> {
        self.cells
            .get_mut((position.y, position.x))
            .ok_or_else(|| invalid_parameter("position", &position, &"outside the grid"))
    }

    /// Cells with their positions in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), cell)| (Position::new(x, y), cell))
    }

    /// Cell one step from `position` along `direction`, wrapping at the edges
    pub fn neighbor(&self, position: Position, direction: Direction) -> Position {
        position.wrapped_step(direction, self.width(), self.height())
    }

    /// Whether an ant stands on `position`
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupancy.is_occupied(position)
    }

    /// Number of cells holding an ant
    pub fn occupied_count(&self) -> usize {
        self.occupancy.count()
    }

    /// Nest cells
    pub fn nests(&self) -> &[Position] {
        &self.nests
    }

    /// Number of food kinds
    pub const fn food_kinds(&self) -> usize {
        self.targets.len()
    }

    /// Target color of `food_id`
    ///
    /// # Errors
    ///
    /// Returns `UnknownFoodKind` when no such kind exists
    pub fn target_color(&self, food_id: FoodId) -> Result<Color> {
        self.targets
            .get(food_id)
            .copied()
            .ok_or(SimulationError::UnknownFoodKind {
                food_id,
                known: self.targets.len(),
            })
    }

    /// Palette walker of `food_id`
    pub fn palette(&self, food_id: FoodId) -> Option<&PaletteWalker> {
        self.palettes.get(food_id)
    }

    /// Pixel buffer
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Move `ant` onto `position` if it is free
    ///
    /// Reinforces the food channel for a laden ant and the home channel
    /// otherwise, marks the cell occupied and paints it in the ant's color.
    /// Returns false without touching anything when the cell is taken.
    pub fn try_enter(&mut self, position: Position, ant: &Ant) -> bool {
        if self.occupancy.is_occupied(position) {
            return false;
        }
        let gain = self.config.pheromone_gain;
        let max_food = self.config.max_food_pheromone;
        let max_home = self.config.max_home_pheromone;
        let Ok(cell) = self.cell_mut(position) else {
            return false;
        };
        if ant.is_laden() {
            cell.food_pheromone = reinforce(cell.food_pheromone, gain, max_food);
        } else {
            cell.home_pheromone = reinforce(cell.home_pheromone, gain, max_home);
        }
        self.occupancy.set(position, true);
        self.paint(position, ant.color);
        true
    }

    /// Move `ant` onto `position`, failing if another ant is there
    ///
    /// # Errors
    ///
    /// Returns `CellOccupied` when the cell holds an ant and `InvalidParameter`
    /// for a position outside the grid
    pub fn enter(&mut self, position: Position, ant: &Ant) -> Result<()> {
        if self.occupancy.is_occupied(position) {
            return Err(SimulationError::CellOccupied { position });
        }
        self.cell_mut(position)?;
        if self.try_enter(position, ant) {
            Ok(())
        } else {
            Err(SimulationError::CellOccupied { position })
        }
    }

    /// Let the ant on `position` go and repaint what it covered
    ///
    /// Open ground draws its next color from the palette of `food_id` and
    /// shows it at trail intensity. Nests, food and sites show their own colors.
    ///
    /// # Errors
    ///
    /// Returns `CellVacant` when no ant stands there and `UnknownFoodKind` when
    /// open ground is left by an ant of an unknown kind
    pub fn leave<R: Rng + ?Sized>(
        &mut self,
        position: Position,
        food_id: FoodId,
        rng: &mut R,
    ) -> Result<()> {
        if !self.occupancy.is_occupied(position) {
            return Err(SimulationError::CellVacant { position });
        }
        let cell = *self
            .cell(position)
            .ok_or_else(|| invalid_parameter("position", &position, &"outside the grid"))?;

        let paint = match cell.kind {
            CellKind::Default { color } => {
                let known = self.palettes.len();
                let walker = self
                    .palettes
                    .get_mut(food_id)
                    .ok_or(SimulationError::UnknownFoodKind { food_id, known })?;
                let drawn = walker.step(rng).or(color);
                self.cell_mut(position)?.kind = CellKind::Default { color: drawn };
                drawn.map_or(self.config.background_color, |drawn| {
                    scale(drawn, self.trail_intensity(&cell))
                })
            }
            CellKind::Nest { .. } => self.config.nest_color,
            CellKind::Food { food_id: kind, .. } => self.target_color(kind)?,
            CellKind::Site { color, .. } => color,
        };

        self.occupancy.set(position, false);
        self.paint(position, paint);
        Ok(())
    }

    /// Take one unit of food from a source of kind `food_id`
    ///
    /// The last unit turns the source into a site whose color is drawn from the
    /// food kind's palette, or its target color when the palette has none.
    /// Returns the units left.
    ///
    /// # Errors
    ///
    /// Returns `NotFoodSource` when the cell is not food and
    /// `FoodKindMismatch` when it belongs to another food kind
    pub fn pick_up<R: Rng + ?Sized>(
        &mut self,
        position: Position,
        food_id: FoodId,
        rng: &mut R,
    ) -> Result<u32> {
        let kind = self.cell_mut(position)?.kind;
        let CellKind::Food {
            food_id: found,
            remaining,
        } = kind
        else {
            return Err(SimulationError::NotFoodSource { position });
        };
        if found != food_id {
            return Err(SimulationError::FoodKindMismatch {
                position,
                expected: food_id,
                found,
            });
        }

        let remaining = remaining.saturating_sub(1);
        let next = if remaining == 0 {
            let target = self.target_color(food_id)?;
            let color = self
                .palettes
                .get_mut(food_id)
                .and_then(|walker| walker.step(rng))
                .unwrap_or(target);
            CellKind::Site { food_id, color }
        } else {
            CellKind::Food { food_id, remaining }
        };
        self.cell_mut(position)?.kind = next;
        Ok(remaining)
    }

    /// Store `amount` units in a nest, returning its new total
    ///
    /// # Errors
    ///
    /// Returns `NotNest` when the cell is not a nest
    pub fn deposit(&mut self, position: Position, amount: u32) -> Result<u64> {
        let cell = self.cell_mut(position)?;
        match &mut cell.kind {
            CellKind::Nest { stored } => {
                *stored += u64::from(amount);
                Ok(*stored)
            }
            _ => Err(SimulationError::NotNest { position }),
        }
    }

    /// Age every trail by one tick
    ///
    /// Open ground loses a fixed fraction of both channels. Faded cells return
    /// to background and the rest are shaded by their food trail. Cells under
    /// an ant keep the ant's paint.
    pub fn decay_tick(&mut self) {
        let Self {
            cells,
            occupancy,
            canvas,
            config,
            ..
        } = self;

        for ((y, x), cell) in cells.indexed_iter_mut() {
            let CellKind::Default { color } = cell.kind else {
                continue;
            };
            cell.home_pheromone = decay(cell.home_pheromone, config.pheromone_decay_rate);
            cell.food_pheromone = decay(cell.food_pheromone, config.pheromone_decay_rate);

            let position = Position::new(x, y);
            if occupancy.is_occupied(position) {
                continue;
            }
            let paint = if cell.total_pheromone() < config.minimum_pheromone_threshold {
                Some(config.background_color)
            } else {
                color.map(|color| {
                    scale(
                        color,
                        intensity(
                            cell.food_pheromone,
                            config.max_food_pheromone,
                            config.intensity_amplifier,
                        ),
                    )
                })
            };
            if let Some(paint) = paint {
                paint_cell(canvas, config.cell_size, position, paint);
            }
        }
    }

    /// Paint every nest in the background color
    pub fn erase_nests(&mut self) {
        let background = self.config.background_color;
        for position in self.nests.clone() {
            self.paint(position, background);
        }
    }

    fn trail_intensity(&self, cell: &Cell) -> f32 {
        intensity(
            cell.food_pheromone,
            self.config.max_food_pheromone,
            self.config.intensity_amplifier,
        )
    }

    fn paint(&mut self, position: Position, color: Color) {
        paint_cell(&mut self.canvas, self.config.cell_size, position, color);
    }
}

fn paint_cell(canvas: &mut RgbImage, cell_size: u32, position: Position, color: Color) {
    let x0 = position.x as u32 * cell_size;
    let y0 = position.y as u32 * cell_size;
    for y in y0..y0 + cell_size {
        for x in x0..x0 + cell_size {
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = to_pixel(color);
            }
        }
    }
}
