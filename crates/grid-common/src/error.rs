//! Error types for grid construction and boundary computation.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while building areas, grids and latitude boundaries.
///
/// Every error is detected when the value is constructed; nothing is
/// validated lazily.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Malformed area or grid specification string.
    #[error("invalid format: {0}")]
    Format(String),

    /// Area bounds violate the ordering or periodicity invariants.
    #[error("area out of range: {0}")]
    Range(String),

    /// The grid specification matches no known grid family.
    #[error("Unrecognized grid '{0}'")]
    UnrecognizedGrid(String),

    /// Gaussian grids are only defined over the global area.
    #[error("grid '{grid}' does not support area {area}")]
    UnsupportedArea { grid: String, area: String },

    /// A grid dimension is zero or negative.
    #[error("invalid value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// Fewer than two rows, so there is no interior row edge.
    #[error("degenerate grid: {0}")]
    DegenerateGrid(String),
}

impl GridError {
    /// Create a Format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a Range error.
    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }

    /// Create an UnsupportedArea error.
    pub fn unsupported_area(grid: impl Into<String>, area: impl Into<String>) -> Self {
        Self::UnsupportedArea {
            grid: grid.into(),
            area: area.into(),
        }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a DegenerateGrid error.
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateGrid(msg.into())
    }

    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GridError::Format(_) => "FormatError",
            GridError::Range(_) => "RangeError",
            GridError::UnrecognizedGrid(_) => "UnrecognizedGridError",
            GridError::UnsupportedArea { .. } => "UnsupportedAreaError",
            GridError::InvalidParameter { .. } => "InvalidParameterError",
            GridError::DegenerateGrid(_) => "DegenerateGridError",
        }
    }
}
