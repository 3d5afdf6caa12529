//! Fire Grid Core Library
//!
//! A deterministic cellular automaton for fire spreading through a
//! rectangular forest. Every cell is Empty, a Tree or Burning; each step a
//! burning cell burns out and ignites neighbouring trees.
//!
//! ## Layout
//!
//! - [`core_types`] - cells, states, locations and compass directions
//! - [`neighbour`] - which neighbours of a cell are sampled
//! - [`spread`] - what the sampled neighbours mean for the cell's next state
//! - [`grid`] - the grid state machine tying the two together
//! - [`render`] - traversal-driven output of a snapshot
//! - [`config`] - serialisable run settings
//!
//! ```
//! use fire_grid_core::{FireGrid, SpreadWith, StringRenderer};
//!
//! let mut grid = FireGrid::new(5, 5).unwrap();
//! while grid.spread(SpreadWith::Default) {}
//!
//! let mut renderer = StringRenderer::new();
//! grid.render(&mut renderer);
//! assert!(!renderer.as_str().contains('^'));
//! ```

pub mod config;
pub mod core_types;
pub mod grid;
pub mod neighbour;
pub mod render;
pub mod spread;

pub use config::{Neighbourhood, SimulationConfig};
pub use core_types::{Cell, CellState, Direction, GridLocation};
pub use grid::{FireGrid, FireGridBuilder, FireSimulation, GridDimensions, GridError, GridGeometry};
pub use neighbour::{CardinalNeighbourStrategy, CellNeighbour, NeighbourState, NeighbourStrategy};
pub use render::{Glyphs, Renderer, StringRenderer};
pub use spread::{SpreadRule, SpreadStrategy, SpreadWith, StandardSpreadStrategy, WindSpreadStrategy};
