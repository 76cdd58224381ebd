//! Error types for hexcover operations.

use thiserror::Error;

use crate::coord::HexCoord;

/// Result type for hexcover operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the pattern, grid and text layers.
///
/// All of these are precondition violations reported straight to the
/// caller. A dead end during search is a normal outcome, not an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern value outside [0, 127].
    #[error("invalid pattern code: {0}")]
    InvalidCode(i32),

    /// Torus dimensions that are negative or of odd height.
    #[error("invalid torus dimensions: {width} × {height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// A pattern was read from a cell that holds none.
    #[error("cell {0} is unset")]
    UnsetCell(HexCoord),

    /// Verification found a raw cell value that is neither 0, 1 nor unset.
    #[error("cell {index} holds {value:#04x}, expected a raw 0 or 1")]
    InconsistentCell { index: usize, value: u8 },

    /// A row width that cannot tile a 128-hexagon torus.
    #[error("a row of {0} hexagons cannot tile a 128-hexagon torus")]
    UnsupportedArea(usize),

    /// A row whose length differs from the first row.
    #[error("row {row} has {found} hexagons, expected {expected}")]
    RaggedLine {
        row: usize,
        found: usize,
        expected: usize,
    },
}
