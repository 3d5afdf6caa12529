//! Sampled neighbour states

use crate::core_types::{CellState, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the neighbouring cell in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellNeighbour {
    direction: Direction,
    state: CellState,
}

impl CellNeighbour {
    #[must_use]
    pub const fn new(direction: Direction, state: CellState) -> Self {
        Self { direction, state }
    }

    /// Direction of the neighbour, seen from the sampled cell
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Previous-step state of the neighbour
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }
}

impl fmt::Display for CellNeighbour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.direction, self.state)
    }
}

/// The neighbours sampled for one cell, at most one entry per direction.
///
/// Built fresh for every neighbour query and never modified afterwards;
/// filtering produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CellNeighbour>", into = "Vec<CellNeighbour>")]
pub struct NeighbourState {
    states: Vec<CellNeighbour>,
}

impl NeighbourState {
    /// Build from sampled entries.
    ///
    /// Entries keep their order. A repeated direction keeps its first entry.
    #[must_use]
    pub fn new(mut states: Vec<CellNeighbour>) -> Self {
        let mut seen = [false; Direction::ALL.len()];
        states.retain(|n| !std::mem::replace(&mut seen[n.direction.ordinal()], true));
        Self { states }
    }

    /// A state with no neighbours at all
    #[must_use]
    pub const fn empty() -> Self {
        Self { states: Vec::new() }
    }

    /// Sampled entries in sampling order
    #[must_use]
    pub fn states(&self) -> &[CellNeighbour] {
        &self.states
    }

    /// Iterate over the sampled entries
    pub fn iter(&self) -> std::slice::Iter<'_, CellNeighbour> {
        self.states.iter()
    }

    /// Number of sampled neighbours
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of the neighbour in `direction`, if it was sampled
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<CellState> {
        self.states
            .iter()
            .find(|n| n.direction == direction)
            .map(CellNeighbour::state)
    }

    /// Keep only the entries whose direction is listed in `directions`
    #[must_use]
    pub fn filter_by_directions(&self, directions: &[Direction]) -> Self {
        Self {
            states: self
                .states
                .iter()
                .filter(|n| directions.contains(&n.direction))
                .copied()
                .collect(),
        }
    }

    /// True if any sampled neighbour is in `state`
    #[must_use]
    pub fn any_in_state(&self, state: CellState) -> bool {
        self.states.iter().any(|n| n.state == state)
    }
}

impl From<Vec<CellNeighbour>> for NeighbourState {
    fn from(states: Vec<CellNeighbour>) -> Self {
        Self::new(states)
    }
}

impl From<NeighbourState> for Vec<CellNeighbour> {
    fn from(state: NeighbourState) -> Self {
        state.states
    }
}

impl FromIterator<CellNeighbour> for NeighbourState {
    fn from_iter<I: IntoIterator<Item = CellNeighbour>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NeighbourState {
    type Item = &'a CellNeighbour;
    type IntoIter = std::slice::Iter<'a, CellNeighbour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for NeighbourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, neighbour) in self.states.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{neighbour}")?;
        }
        Ok(())
    }
}
