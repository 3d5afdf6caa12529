//! Immutable cell snapshot

use super::{CellState, GridLocation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One grid position as seen at a single simulation step.
///
/// Cells are never mutated. Each step builds a successor with
/// [`Cell::with_state`], which keeps the index, location and boundary flag
/// and only swaps the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    index: usize,
    location: GridLocation,
    state: CellState,
    is_boundary: bool,
}

impl Cell {
    /// Create a cell
    ///
    /// # Arguments
    ///
    /// * `index` - Position in the row-major snapshot
    /// * `location` - Row and column of the cell
    /// * `state` - Current contents
    /// * `is_boundary` - Whether the cell sits on the outer edge of the grid
    #[must_use]
    pub const fn new(
        index: usize,
        location: GridLocation,
        state: CellState,
        is_boundary: bool,
    ) -> Self {
        Self {
            index,
            location,
            state,
            is_boundary,
        }
    }

    /// Position of the cell in the flat snapshot
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Row and column of the cell
    #[must_use]
    pub const fn location(&self) -> GridLocation {
        self.location
    }

    /// Contents of the cell at this step
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Whether the cell is on the grid border (fixed at construction)
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.is_boundary
    }

    /// Successor of this cell carrying `state`
    #[must_use]
    pub const fn with_state(&self, state: CellState) -> Self {
        Self { state, ..*self }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.index, self.location, self.state)
    }
}
