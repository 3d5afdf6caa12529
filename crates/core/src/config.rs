//! Simulation configuration
//!
//! Plain serialisable settings that describe a run. Command-line front ends
//! fill in a [`SimulationConfig`] and hand it to
//! [`FireGrid::from_config`](crate::FireGrid::from_config).

use crate::core_types::GridLocation;
use crate::grid::{check_size, GridError};
use crate::neighbour::CardinalNeighbourStrategy;
use crate::spread::SpreadRule;
use serde::{Deserialize, Serialize};

/// Which neighbours each cell samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Neighbourhood {
    /// All eight surrounding cells
    #[default]
    Moore,
    /// North, east, south and west only
    VonNeumann,
}

impl Neighbourhood {
    /// Neighbour strategy sampling this neighbourhood
    #[must_use]
    pub fn strategy(self) -> CardinalNeighbourStrategy {
        match self {
            Self::Moore => CardinalNeighbourStrategy::new(),
            Self::VonNeumann => CardinalNeighbourStrategy::cardinal_only(),
        }
    }
}

/// Everything needed to build a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Ignition location, `None` for the grid centre
    pub ignition: Option<GridLocation>,
    pub neighbourhood: Neighbourhood,
    pub spread_rule: SpreadRule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 21,
            height: 21,
            ignition: None,
            neighbourhood: Neighbourhood::default(),
            spread_rule: SpreadRule::default(),
        }
    }
}

impl SimulationConfig {
    /// Check the dimensions without building a grid
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] for the first dimension below
    /// [`MIN_SIZE`](crate::grid::MIN_SIZE), width before height;
    /// [`GridError::TooLarge`] if the cell count overflows.
    pub fn validate(&self) -> Result<(), GridError> {
        check_size(self.width, self.height)
    }
}
