//! Error types for Cellplot.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Almost every variant is a user-input problem that ends up in the status
//! log; nothing here is fatal to the application.

use crate::cells::{CellId, CellKind};
use thiserror::Error;

/// Result type alias for Cellplot operations.
pub type Result<T> = std::result::Result<T, CellplotError>;

/// Errors that can occur in Cellplot.
#[derive(Debug, Error)]
pub enum CellplotError {
    /// The cell collection is full.
    #[error("Max number of cells reached!")]
    CapacityReached,

    /// The requested kind is excluded by the cells already present.
    #[error("Cannot create a {kind} cell together with the current cells")]
    KindDisabled { kind: CellKind },

    /// No cell with the given id.
    #[error("Cell not found: {id}")]
    CellNotFound { id: CellId },

    /// A field id that the cell kind does not have.
    #[error("{kind} cells have no field '{field}'")]
    UnknownField { kind: CellKind, field: &'static str },

    /// A choice field was given a value outside its list.
    #[error("'{value}' is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },

    /// A value that had to be numeric was not.
    #[error("could not convert string to float: '{value}'")]
    NotANumber { value: String },

    /// A style number (line width, marker size) is negative.
    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// Line plot x/y lengths differ.
    #[error("x and y must have same first dimension, but have shapes ({x},) and ({y},)")]
    ShapeMismatch { x: usize, y: usize },

    /// Scatter x/y sizes differ.
    #[error("x and y must be the same size")]
    SizeMismatch,

    /// Bar positions and heights cannot be broadcast together.
    #[error("shape mismatch: objects cannot be broadcast to a single shape ({x},) and ({y},)")]
    BroadcastMismatch { x: usize, y: usize },

    /// Categorical and numeric x values on the same figure.
    #[error("cannot mix categorical and numeric x values on one figure")]
    MixedUnits,

    /// The bins field is not an integer literal.
    #[error("invalid literal for int() with base 10: '{value}'")]
    InvalidBins { value: String },

    /// The bin count is zero or negative.
    #[error("`bins` must be positive, when an integer")]
    NonPositiveBins { bins: i64 },

    /// The bin count is above [`crate::figure::MAX_BINS`].
    #[error("`bins` must be at most {max}, got {bins}")]
    TooManyBins { bins: u64, max: usize },

    /// Histogram data with an infinite sample.
    #[error("autodetected range of histogram data is not finite: {value}")]
    NonFiniteRange { value: f64 },

    /// A pie wedge is negative.
    #[error("Wedge sizes 'x' must be non negative values")]
    NegativeWedge,

    /// A pie without any positive wedge.
    #[error("Cannot plot an unnormalized pie with sum(x) == 0")]
    EmptyPie,

    /// Pie labels do not match the wedges.
    #[error("'label' must be of length 'x' ({wedges}), got {labels}")]
    LabelCount { labels: usize, wedges: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to install the log subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CellplotError {
    /// Create a KindDisabled error.
    pub fn kind_disabled(kind: CellKind) -> Self {
        Self::KindDisabled { kind }
    }

    /// Create a CellNotFound error.
    pub fn cell_not_found(id: CellId) -> Self {
        Self::CellNotFound { id }
    }

    /// Create an InvalidChoice error.
    pub fn invalid_choice(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidChoice {
            field,
            value: value.into(),
        }
    }

    /// Create a NotANumber error.
    pub fn not_a_number(value: impl Into<String>) -> Self {
        Self::NotANumber {
            value: value.into(),
        }
    }

    /// Whether this error came from the contents of a cell rather than from
    /// the collection or the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(
            self,
            Self::CapacityReached
                | Self::KindDisabled { .. }
                | Self::CellNotFound { .. }
                | Self::Io(_)
                | Self::Logging(_)
        )
    }
}
