//! Spread rule trait definition

use crate::core_types::{Cell, CellState};
use crate::neighbour::NeighbourState;
use std::fmt::Debug;

/// Maps a cell and its sampled neighbours to the cell's next state.
///
/// Implementations must be total (a valid state for every input) and pure,
/// so one instance can be shared between grids and steps freely.
pub trait SpreadStrategy: Debug + Send + Sync {
    /// Next-step state of `cell`
    ///
    /// # Arguments
    ///
    /// * `cell` - The cell as it was at the previous step
    /// * `neighbours` - Its neighbours as sampled from the previous step
    fn spread(&self, cell: &Cell, neighbours: &NeighbourState) -> CellState;

    /// Short human-readable name, used in logs
    fn name(&self) -> &'static str;
}

/// Which spread rule a single [`FireGrid::spread`](crate::FireGrid::spread) call uses.
#[derive(Debug, Clone, Copy, Default)]
pub enum SpreadWith<'a> {
    /// The rule the grid was built with
    #[default]
    Default,
    /// A caller-supplied rule for this step only
    Strategy(&'a dyn SpreadStrategy),
}

impl<'a> From<&'a dyn SpreadStrategy> for SpreadWith<'a> {
    fn from(strategy: &'a dyn SpreadStrategy) -> Self {
        Self::Strategy(strategy)
    }
}

impl<'a> From<Option<&'a dyn SpreadStrategy>> for SpreadWith<'a> {
    fn from(strategy: Option<&'a dyn SpreadStrategy>) -> Self {
        strategy.map_or(Self::Default, Self::Strategy)
    }
}
