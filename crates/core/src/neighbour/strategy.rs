//! Neighbour sampling trait definition

use super::NeighbourState;
use crate::core_types::Cell;
use crate::grid::GridGeometry;
use std::fmt::Debug;

/// Decides which neighbours of a cell are sampled and reads their states.
///
/// Implementations must be pure: the result depends only on the arguments,
/// and `previous` must not be retained past the call. The grid always hands
/// over the snapshot from the previous step, never the one being built.
pub trait NeighbourStrategy: Debug + Send + Sync {
    /// Sample the neighbours of `cell`
    ///
    /// # Arguments
    ///
    /// * `grid` - Geometry used for bounds checks and index conversion
    /// * `previous` - Complete snapshot from the previous step, indexed by cell index
    /// * `cell` - The cell being evaluated
    ///
    /// # Returns
    ///
    /// One entry per configured direction whose neighbour lies inside the grid.
    /// Out-of-bounds directions are omitted, never reported as errors.
    fn neighbours(&self, grid: &dyn GridGeometry, previous: &[Cell], cell: &Cell)
        -> NeighbourState;
}
