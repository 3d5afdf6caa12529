//! Neighbour sampling
//!
//! A [`NeighbourStrategy`] decides *which* neighbours of a cell are looked at;
//! what those neighbour states imply is left to the spread strategies.

mod cardinal;
mod state;
mod strategy;

pub use cardinal::CardinalNeighbourStrategy;
pub use state::{CellNeighbour, NeighbourState};
pub use strategy::NeighbourStrategy;
