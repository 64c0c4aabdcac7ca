//! Compass headings and torus coordinates

use std::fmt;

/// Cell coordinates on the grid, `x` across and `y` down
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell along `direction`, wrapping around a `width` by `height` torus
    ///
    /// Coordinates outside the torus are reduced first, so the result is always valid.
    #[must_use]
    pub const fn wrapped_step(self, direction: Direction, width: usize, height: usize) -> Self {
        let [dx, dy] = direction.offset();
        Self {
            x: wrap(self.x, dx, width),
            y: wrap(self.y, dy, height),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// (coordinate + delta + extent) % extent without leaving usize
const fn wrap(coordinate: usize, delta: i8, extent: usize) -> usize {
    if extent == 0 {
        return 0;
    }
    let coordinate = coordinate % extent;
    match delta {
        1 => (coordinate + 1) % extent,
        -1 => (coordinate + extent - 1) % extent,
        _ => coordinate,
    }
}

/// One of the eight compass headings, in clockwise order starting at north
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up
    North,
    /// Up and right
    NorthEast,
    /// Right
    East,
    /// Down and right
    SouthEast,
    /// Down
    South,
    /// Down and left
    SouthWest,
    /// Left
    West,
    /// Up and left
    NorthWest,
}

impl Direction {
    /// All headings in clockwise order
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Unit vector `[dx, dy]` with `y` growing downward
    pub const fn offset(self) -> [i8; 2] {
        match self {
            Self::North => [0, -1],
            Self::NorthEast => [1, -1],
            Self::East => [1, 0],
            Self::SouthEast => [1, 1],
            Self::South => [0, 1],
            Self::SouthWest => [-1, 1],
            Self::West => [-1, 0],
            Self::NorthWest => [-1, -1],
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    const fn from_index(index: usize) -> Self {
        match index % 8 {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            _ => Self::NorthWest,
        }
    }

    /// Heading one step clockwise
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Heading one step counter-clockwise
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 7)
    }

    /// Opposite heading
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The three forward-facing headings: ahead, counter-clockwise, clockwise
    pub const fn forward_fan(self) -> [Self; 3] {
        [self, self.counter_clockwise(), self.clockwise()]
    }
}
