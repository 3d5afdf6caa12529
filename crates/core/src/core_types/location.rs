//! Grid coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable `(row, column)` coordinate of a cell.
///
/// Rows grow southwards and columns grow eastwards, so `(0, 0)` is the
/// north-west corner. "No location" is expressed as `Option<GridLocation>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLocation {
    row: usize,
    column: usize,
}

impl GridLocation {
    /// Create a location from its row and column
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row of the location (0 = northern edge)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of the location (0 = western edge)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Step one cell by `(d_row, d_column)`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds are the caller's concern since a location has no grid.
    #[must_use]
    pub fn offset(&self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let column = self.column.checked_add_signed(d_column)?;
        Some(Self { row, column })
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} Column {}", self.row, self.column)
    }
}

impl From<(usize, usize)> for GridLocation {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}
