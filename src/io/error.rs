//! Error types for simulation, model and file operations

use crate::spatial::cell::FoodId;
use crate::spatial::direction::Position;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all simulation operations
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input data doesn't meet simulation requirements
    InvalidSourceData {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Configuration or argument validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An ant tried to enter a cell that already holds an ant
    CellOccupied {
        /// Cell coordinates
        position: Position,
    },

    /// An ant tried to leave a cell that holds no ant
    CellVacant {
        /// Cell coordinates
        position: Position,
    },

    /// Food pickup attempted on a cell that is not a food source
    NotFoodSource {
        /// Cell coordinates
        position: Position,
    },

    /// Food pickup attempted by an ant bound to another food kind
    FoodKindMismatch {
        /// Cell coordinates
        position: Position,
        /// Food kind the ant is bound to
        expected: FoodId,
        /// Food kind stored in the cell
        found: FoodId,
    },

    /// Food deposit attempted on a cell that is not a nest
    NotNest {
        /// Cell coordinates
        position: Position,
    },

    /// Food kind has no palette or target color
    UnknownFoodKind {
        /// The unknown food kind
        food_id: FoodId,
        /// Number of configured food kinds
        known: usize,
    },

    /// Failed to save an image or animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SimulationError {
    /// Whether this error reports a broken engine contract rather than bad input
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::CellOccupied { .. }
                | Self::CellVacant { .. }
                | Self::NotFoodSource { .. }
                | Self::FoodKindMismatch { .. }
                | Self::NotNest { .. }
                | Self::UnknownFoodKind { .. }
        )
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CellOccupied { position } => {
                write!(f, "Cell {position} is already occupied by an ant")
            }
            Self::CellVacant { position } => {
                write!(f, "Cell {position} has no ant to leave")
            }
            Self::NotFoodSource { position } => {
                write!(f, "Cell {position} is not a food source")
            }
            Self::FoodKindMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Cell {position} holds food kind {found}, ant is bound to {expected}"
                )
            }
            Self::NotNest { position } => {
                write!(f, "Cell {position} is not a nest")
            }
            Self::UnknownFoodKind { food_id, known } => {
                write!(f, "Food kind {food_id} is unknown ({known} configured)")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for simulation results
pub type Result<T> = std::result::Result<T, SimulationError>;

impl From<image::ImageError> for SimulationError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SimulationError {
    SimulationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> SimulationError {
    SimulationError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
