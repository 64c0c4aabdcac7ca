use crate::spatial::direction::Position;
use bitvec::bitvec;
use bitvec::vec::BitVec;

/// One bit per cell marking where an ant stands
///
/// Row-major like the cell arena. Out-of-range positions read as vacant and
/// ignore writes.
#[derive(Clone, Debug)]
pub struct OccupancyMap {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl OccupancyMap {
    /// Create a map with every cell vacant
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.width && position.y < self.height {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }

    /// Test whether an ant stands on `position`
    pub fn is_occupied(&self, position: Position) -> bool {
        self.index(position)
            .and_then(|i| self.bits.get(i).as_deref().copied())
            .unwrap_or(false)
    }

    /// Mark or clear `position`, returning the previous state
    pub fn set(&mut self, position: Position, occupied: bool) -> bool {
        let Some(i) = self.index(position) else {
            return false;
        };
        self.bits.replace(i, occupied)
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Occupied positions in row-major order
    pub fn positions(&self) -> Vec<Position> {
        let width = self.width;
        self.bits
            .iter_ones()
            .map(|i| Position::new(i % width, i / width))
            .collect()
    }

    /// Vacate every cell
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }
}
