//! Per-cell fire state

use serde::{Deserialize, Serialize};
use std::fmt;

/// What currently occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Nothing left to burn (boundary, or burnt out)
    Empty = 0,
    /// Unburnt fuel
    Tree = 1,
    /// On fire this step; always burns out after one step
    Burning = 2,
}

impl CellState {
    /// All states, in discriminant order
    pub const ALL: [CellState; 3] = [CellState::Empty, CellState::Tree, CellState::Burning];
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "Empty",
            Self::Tree => "Tree",
            Self::Burning => "Burning",
        };
        f.write_str(name)
    }
}
