//! Tests for error formatting, sources and conversions

#[cfg(test)]
mod tests {
    use antpaint::SimulationError;
    use antpaint::io::error::{invalid_parameter, invalid_source};
    use antpaint::spatial::direction::Position;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests invariant messages name the cell
    // Verified by formatting positions as debug output
    #[test]
    fn test_invariant_display() {
        let position = Position::new(3, 4);
        assert_eq!(
            SimulationError::CellOccupied { position }.to_string(),
            "Cell (3, 4) is already occupied by an ant"
        );
        let mismatch = SimulationError::FoodKindMismatch {
            position,
            expected: 0,
            found: 1,
        };
        assert_eq!(
            mismatch.to_string(),
            "Cell (3, 4) holds food kind 1, ant is bound to 0"
        );
    }

    // Tests helper constructors fill every field
    // Verified by dropping the reason from parameter errors
    #[test]
    fn test_helpers() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'cell_size' = '0': must be positive"
        );
        assert!(!error.is_invariant_violation());

        let error = invalid_source(&"empty palette");
        assert_eq!(error.to_string(), "Invalid source data: empty palette");
    }

    // Tests invariant violations are told apart from input errors
    // Verified by classifying every variant as an invariant violation
    #[test]
    fn test_invariant_violation_classes() {
        let position = Position::new(0, 0);
        assert!(SimulationError::CellVacant { position }.is_invariant_violation());
        assert!(SimulationError::NotFoodSource { position }.is_invariant_violation());
        assert!(SimulationError::UnknownFoodKind { food_id: 2, known: 1 }.is_invariant_violation());
        assert!(!invalid_source(&"bad").is_invariant_violation());
    }

    // Tests wrapped errors are exposed as sources
    // Verified by returning no source for file system errors
    #[test]
    fn test_error_sources() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = SimulationError::FileSystem {
            path: PathBuf::from("output"),
            operation: "create directory",
            source: io_error,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
        assert!(SimulationError::NotNest {
            position: Position::new(1, 1)
        }
        .source()
        .is_none());
    }

    // Tests conversions from library errors
    // Verified by mapping I/O errors to image errors
    #[test]
    fn test_from_io_error() {
        let error: SimulationError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, SimulationError::FileSystem { .. }));
    }
}
