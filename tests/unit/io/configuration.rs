//! Tests for configuration constants and validation

#[cfg(test)]
mod tests {
    use antpaint::SimulationError;
    use antpaint::io::configuration::{
        BACKGROUND_COLOR, COLOR_FILTERING_HIGHER_LIMIT, COLOR_FILTERING_LOWER_LIMIT,
        DEFAULT_SAMPLE_INTERVAL, DEFAULT_TICKS, MAX_FOOD_PHEROMONE, MAX_HOME_PHEROMONE,
        NEST_COLOR, OIL_PAINTED_SUFFIX, RAW_SUFFIX, SimulationConfig,
    };

    fn rejected_parameter(config: &SimulationConfig) -> Option<&'static str> {
        match config.validate() {
            Err(SimulationError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests the defaults pass validation and mirror the constants
    // Verified by defaulting the nest color to the background
    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.background_color, BACKGROUND_COLOR);
        assert_eq!(config.nest_color, NEST_COLOR);
        assert!((config.max_food_pheromone - MAX_FOOD_PHEROMONE).abs() < f32::EPSILON);
        assert!((config.max_home_pheromone - MAX_HOME_PHEROMONE).abs() < f32::EPSILON);
    }

    // Tests zero counts are rejected by name
    // Verified by skipping the count checks
    #[test]
    fn test_zero_counts_rejected() {
        let config = SimulationConfig {
            cell_size: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("cell_size"));

        let config = SimulationConfig {
            max_ants: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("max_ants"));
    }

    // Tests a grid without procedural food is still valid
    // Verified by requiring a positive food area count
    #[test]
    fn test_zero_food_areas_allowed() {
        let config = SimulationConfig {
            food_area_count: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests pheromone knobs must be positive and finite
    // Verified by accepting negative gains
    #[test]
    fn test_pheromone_levels_rejected() {
        let config = SimulationConfig {
            pheromone_gain: -1.0,
            ..SimulationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("pheromone_gain"));

        let config = SimulationConfig {
            max_food_pheromone: f32::NAN,
            ..SimulationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("max_food_pheromone"));
    }

    // Tests decay cannot remove more than the whole trail
    // Verified by dropping the upper bound on the decay rate
    #[test]
    fn test_decay_rate_bounded() {
        let config = SimulationConfig {
            pheromone_decay_rate: 1.5,
            ..SimulationConfig::default()
        };
        assert_eq!(rejected_parameter(&config), Some("pheromone_decay_rate"));

        let config = SimulationConfig {
            pheromone_decay_rate: 1.0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests run constants are consistent with each other
    // Verified by sampling less often than the run length
    #[test]
    fn test_run_constants() {
        assert!(DEFAULT_SAMPLE_INTERVAL > 0);
        assert_eq!(DEFAULT_TICKS % DEFAULT_SAMPLE_INTERVAL, 0);
        assert!(COLOR_FILTERING_LOWER_LIMIT < COLOR_FILTERING_HIGHER_LIMIT);
    }

    // Tests output suffixes produce distinct file names
    // Verified by using the same suffix twice
    #[test]
    fn test_output_suffixes() {
        assert!(RAW_SUFFIX.starts_with('_'));
        assert!(OIL_PAINTED_SUFFIX.starts_with('_'));
        assert_ne!(RAW_SUFFIX, OIL_PAINTED_SUFFIX);
    }
}
