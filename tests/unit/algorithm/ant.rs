//! Tests for the foraging state machine

#[cfg(test)]
mod tests {
    use antpaint::algorithm::ant::Ant;
    use antpaint::algorithm::selection::CandidateSelector;
    use antpaint::analysis::markov::ColorMarkovChain;
    use antpaint::io::configuration::{ANT_COLOR, SimulationConfig};
    use antpaint::math::color::{BLACK, Color};
    use antpaint::spatial::CellGrid;
    use antpaint::spatial::cell::CellKind;
    use antpaint::spatial::direction::{Direction, Position};
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const RED: Color = [200, 0, 0];
    const GREEN: Color = [0, 200, 0];

    const FROM: Position = Position::new(2, 2);
    const AHEAD: Position = Position::new(3, 2);
    const LEFT: Position = Position::new(3, 1);
    const RIGHT: Position = Position::new(3, 3);
    const BEHIND: Position = Position::new(1, 2);

    struct Fixture {
        grid: CellGrid,
        selector: CandidateSelector,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            let palette_image = RgbImage::from_pixel(2, 2, Rgb(GREEN));
            let palette = ColorMarkovChain::trained(&palette_image, &[BLACK], 50);
            let config = SimulationConfig {
                cell_size: 1,
                ..SimulationConfig::default()
            };
            let grid = CellGrid::new(5, 5, config, vec![RED, GREEN], vec![palette.clone(), palette])
                .expect("valid grid");
            Self {
                grid,
                selector: CandidateSelector::new(0),
                rng: StdRng::seed_from_u64(11),
            }
        }

        fn place(&mut self, capacity: u32, carried: u32) -> Ant {
            let mut ant = Ant::new(FROM, Direction::East, capacity, 0, ANT_COLOR);
            ant.carried = carried;
            self.grid.enter(FROM, &ant).expect("free cell");
            ant
        }

        fn update(&mut self, ant: &mut Ant) {
            ant.update(&mut self.grid, &mut self.selector, &mut self.rng)
                .expect("valid update");
        }

        fn kind(&self, position: Position) -> CellKind {
            self.grid.cell(position).expect("inside grid").kind
        }
    }

    // Tests an empty-handed ant on open ground steps ahead and keeps its heading
    // Verified by turning the heading toward every move
    #[test]
    fn test_moves_forward() {
        let mut fixture = Fixture::new();
        let mut ant = fixture.place(2, 0);
        fixture.update(&mut ant);

        assert_eq!(ant.position, AHEAD);
        assert_eq!(ant.heading, Direction::East);
        assert_eq!(ant.heading_reversals(), 0);
        assert!(fixture.grid.is_occupied(AHEAD));
        assert!(!fixture.grid.is_occupied(FROM));
    }

    // Tests an ant boxed in by other ants stays put without error
    // Verified by entering the first candidate unconditionally
    #[test]
    fn test_blocked_stays_put() {
        let mut fixture = Fixture::new();
        let mut ant = fixture.place(2, 0);
        for position in [AHEAD, LEFT, RIGHT] {
            let blocker = Ant::new(position, Direction::West, 2, 0, ANT_COLOR);
            fixture.grid.enter(position, &blocker).expect("free cell");
        }
        fixture.update(&mut ant);

        assert_eq!(ant.position, FROM);
        assert!(fixture.grid.is_occupied(FROM));
        assert_eq!(fixture.grid.occupied_count(), 4);
    }

    // Tests a pickup that does not fill the ant keeps it on the food
    // Verified by moving after every pickup
    #[test]
    fn test_partial_pickup_stays() {
        let mut fixture = Fixture::new();
        fixture
            .grid
            .set_kind(FROM, CellKind::Food { food_id: 0, remaining: 5 })
            .expect("inside grid");
        let mut ant = fixture.place(2, 0);
        fixture.update(&mut ant);

        assert_eq!(ant.carried, 1);
        assert_eq!(ant.position, FROM);
        assert_eq!(fixture.kind(FROM), CellKind::Food { food_id: 0, remaining: 4 });
    }

    // Tests the filling pickup turns the ant around and sends it home
    // Verified by keeping the heading after the ant fills up
    #[test]
    fn test_filling_pickup_reverses() {
        let mut fixture = Fixture::new();
        fixture
            .grid
            .set_kind(FROM, CellKind::Food { food_id: 0, remaining: 1 })
            .expect("inside grid");
        let mut ant = fixture.place(1, 0);
        fixture.update(&mut ant);

        assert!(ant.is_laden());
        assert_eq!(ant.heading, Direction::West);
        assert_eq!(ant.heading_reversals(), 1);
        assert_eq!(ant.position, BEHIND);
        assert!(fixture.kind(FROM).is_site());
    }

    // Tests an ant ignores food of another kind
    // Verified by picking up any food
    #[test]
    fn test_other_food_kind_ignored() {
        let mut fixture = Fixture::new();
        fixture
            .grid
            .set_kind(FROM, CellKind::Food { food_id: 1, remaining: 5 })
            .expect("inside grid");
        let mut ant = fixture.place(2, 0);
        fixture.update(&mut ant);

        assert_eq!(ant.carried, 0);
        assert_eq!(ant.position, AHEAD);
        assert_eq!(fixture.kind(FROM), CellKind::Food { food_id: 1, remaining: 5 });
    }

    // Tests a laden ant on a nest unloads everything and heads out again
    // Verified by depositing a single unit
    #[test]
    fn test_deposit_on_nest() {
        let mut fixture = Fixture::new();
        fixture
            .grid
            .set_kind(FROM, CellKind::Nest { stored: 0 })
            .expect("inside grid");
        let mut ant = fixture.place(3, 3);
        fixture.update(&mut ant);

        assert_eq!(fixture.kind(FROM), CellKind::Nest { stored: 3 });
        assert_eq!(ant.carried, 0);
        assert_eq!(ant.heading, Direction::West);
        assert_eq!(ant.heading_reversals(), 1);
        assert_eq!(ant.position, BEHIND);
    }

    // Tests a laden ant steers into a nest in reach without turning
    // Verified by following the trail ranking when a nest is in reach
    #[test]
    fn test_laden_seeks_nest() {
        let mut fixture = Fixture::new();
        fixture
            .grid
            .set_kind(RIGHT, CellKind::Nest { stored: 0 })
            .expect("inside grid");
        let mut ant = fixture.place(1, 1);
        fixture.update(&mut ant);

        assert_eq!(ant.position, RIGHT);
        assert_eq!(ant.heading, Direction::East);
        assert_eq!(ant.heading_reversals(), 0);
    }

    // Tests an ant outside the grid reports an error
    // Verified by clamping the position into the grid
    #[test]
    fn test_update_outside_grid_fails() {
        let mut fixture = Fixture::new();
        let mut ant = Ant::new(Position::new(9, 9), Direction::East, 1, 0, ANT_COLOR);
        let result = ant.update(&mut fixture.grid, &mut fixture.selector, &mut fixture.rng);
        assert!(result.is_err());
    }
}
