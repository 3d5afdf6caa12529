//! Builder for [`FireGrid`]

use super::{FireGrid, GridError};
use crate::core_types::GridLocation;
use crate::neighbour::{CardinalNeighbourStrategy, NeighbourStrategy};
use crate::spread::{SpreadStrategy, StandardSpreadStrategy};

/// Collects the optional parts of a grid before it is built.
///
/// Unset parts fall back to centre ignition, all-eight-direction neighbour
/// sampling and the standard spread rule.
#[derive(Debug)]
pub struct FireGridBuilder {
    width: usize,
    height: usize,
    ignition: Option<GridLocation>,
    neighbour_strategy: Option<Box<dyn NeighbourStrategy>>,
    spread_strategy: Option<Box<dyn SpreadStrategy>>,
}

impl FireGridBuilder {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ignition: None,
            neighbour_strategy: None,
            spread_strategy: None,
        }
    }

    /// Cell that starts Burning.
    ///
    /// A location on the border or outside the grid is accepted but never
    /// burns, leaving the grid completed from the start.
    pub fn ignition(mut self, location: GridLocation) -> Self {
        self.ignition = Some(location);
        self
    }

    pub fn neighbour_strategy(mut self, strategy: Box<dyn NeighbourStrategy>) -> Self {
        self.neighbour_strategy = Some(strategy);
        self
    }

    /// Rule used by [`FireGrid::spread`] when no override is given
    pub fn spread_strategy(mut self, strategy: Box<dyn SpreadStrategy>) -> Self {
        self.spread_strategy = Some(strategy);
        self
    }

    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] if the width or height is too small.
    /// Width is checked first. [`GridError::TooLarge`] if the cell count
    /// overflows.
    pub fn build(self) -> Result<FireGrid, GridError> {
        FireGrid::assemble(
            self.width,
            self.height,
            self.ignition,
            self.neighbour_strategy
                .unwrap_or_else(|| Box::new(CardinalNeighbourStrategy::new())),
            self.spread_strategy
                .unwrap_or_else(|| Box::new(StandardSpreadStrategy)),
        )
    }
}
