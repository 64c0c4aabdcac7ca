//! Tests for compass rotation and torus stepping

#[cfg(test)]
mod tests {
    use antpaint::spatial::direction::{Direction, Position};

    // Tests one clockwise step from north and east
    // Verified by rotating counter-clockwise in clockwise
    #[test]
    fn test_rotation_steps() {
        assert_eq!(Direction::North.clockwise(), Direction::NorthEast);
        assert_eq!(Direction::North.counter_clockwise(), Direction::NorthWest);
        assert_eq!(Direction::East.clockwise(), Direction::SouthEast);
        assert_eq!(Direction::NorthWest.clockwise(), Direction::North);
    }

    // Tests eight clockwise steps return to the start
    // Verified by skipping a heading in the rotation table
    #[test]
    fn test_full_rotation() {
        for start in Direction::ALL {
            let mut heading = start;
            for _ in 0..8 {
                heading = heading.clockwise();
            }
            assert_eq!(heading, start);
            assert_eq!(start.clockwise().counter_clockwise(), start);
        }
    }

    // Tests reversal negates the offset and is its own inverse
    // Verified by reversing to the clockwise neighbor
    #[test]
    fn test_reverse() {
        assert_eq!(Direction::East.reverse(), Direction::West);
        assert_eq!(Direction::NorthEast.reverse(), Direction::SouthWest);
        for direction in Direction::ALL {
            let [dx, dy] = direction.offset();
            assert_eq!(direction.reverse().offset(), [-dx, -dy]);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    // Tests the forward fan is ahead, counter-clockwise, clockwise
    // Verified by swapping the side candidates
    #[test]
    fn test_forward_fan_order() {
        assert_eq!(
            Direction::East.forward_fan(),
            [Direction::East, Direction::NorthEast, Direction::SouthEast]
        );
        assert_eq!(
            Direction::North.forward_fan(),
            [Direction::North, Direction::NorthWest, Direction::NorthEast]
        );
    }

    // Tests y grows downward in offsets
    // Verified by flipping the sign of north
    #[test]
    fn test_offsets() {
        assert_eq!(Direction::North.offset(), [0, -1]);
        assert_eq!(Direction::East.offset(), [1, 0]);
        assert_eq!(Direction::South.offset(), [0, 1]);
        assert_eq!(Direction::West.offset(), [-1, 0]);
    }

    // Tests wrapping at every edge of the torus
    // Verified by clamping instead of wrapping
    #[test]
    fn test_wrapped_step_edges() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.wrapped_step(Direction::West, 5, 4), Position::new(4, 0));
        assert_eq!(origin.wrapped_step(Direction::North, 5, 4), Position::new(0, 3));
        assert_eq!(
            Position::new(4, 3).wrapped_step(Direction::SouthEast, 5, 4),
            Position::new(0, 0)
        );
    }

    // Tests stepping back then forward returns to the start everywhere
    // Verified by not wrapping negative coordinates
    #[test]
    fn test_step_back_and_forth() {
        for y in 0..3 {
            for x in 0..4 {
                let start = Position::new(x, y);
                for direction in Direction::ALL {
                    let back = start.wrapped_step(direction.reverse(), 4, 3);
                    assert_eq!(back.wrapped_step(direction, 4, 3), start);
                }
            }
        }
    }

    // Tests position display
    // Verified by swapping coordinates in the formatter
    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(1, 2).to_string(), "(1, 2)");
    }
}
