//! Error types for grid construction, extraction, and file operations

use std::fmt;
use std::path::PathBuf;

use crate::extraction::controller::GiveUpReason;
use crate::spatial::{Coord, Shape};

/// The defect that stopped a grid from being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralDefect {
    /// No cells or rows were supplied
    Empty,
    /// A coordinate inside the bounding rectangle has no cell
    Missing(Coord),
    /// A coordinate was supplied more than once
    Duplicate(Coord),
    /// A row does not have the same length as the first row
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

impl fmt::Display for StructuralDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no cells supplied"),
            Self::Missing(coord) => write!(f, "missing cell at position {coord}"),
            Self::Duplicate(coord) => write!(f, "multiple cells found at position {coord}"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has {actual} columns, expected {expected}"),
        }
    }
}

/// Main error type for all decomposition operations
#[derive(Debug)]
pub enum GridsplitError {
    /// Grid fails the rectangular coverage invariant
    ///
    /// Fatal for the grid in question; never retried.
    Structural {
        /// What is wrong with the supplied cells
        defect: StructuralDefect,
    },

    /// A coordinate lies outside the shape it was placed into
    CoordinateOutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Shape of the receiving pattern or grid
        shape: Shape,
    },

    /// The retry controller could not reach a valid decomposition
    NonConvergence {
        /// Why the controller stopped
        reason: GiveUpReason,
        /// Number of oracle calls made
        attempts: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Puzzle page could not be parsed
    PuzzleParse {
        /// Path to the puzzle file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// No puzzle file matches the requested page number
    PageNotFound {
        /// Folder that was searched
        folder: PathBuf,
        /// Requested page number
        page: usize,
    },

    /// Failed to save a rendered image to disk
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

impl fmt::Display for GridsplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural { defect } => write!(f, "Structural error: {defect}"),
            Self::CoordinateOutOfBounds { coord, shape } => {
                write!(f, "Coordinate {coord} is outside a {shape} shape")
            }
            Self::NonConvergence { reason, attempts } => {
                write!(f, "No valid decomposition after {attempts} attempt(s): {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PuzzleParse { path, source } => {
                write!(f, "Failed to parse puzzle '{}': {source}", path.display())
            }
            Self::PageNotFound { folder, page } => {
                write!(f, "No puzzle for page {page} in '{}'", folder.display())
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

impl std::error::Error for GridsplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PuzzleParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, GridsplitError>;

impl From<StructuralDefect> for GridsplitError {
    fn from(defect: StructuralDefect) -> Self {
        Self::Structural { defect }
    }
}

impl From<std::io::Error> for GridsplitError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for GridsplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::PuzzleParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<image::ImageError> for GridsplitError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridsplitError {
    GridsplitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build a file system error for `operation` on `path`
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GridsplitError {
    GridsplitError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
