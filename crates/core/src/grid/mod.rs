//! Grid geometry and the fire grid itself

mod builder;
mod error;
mod fire_grid;
mod geometry;
mod simulation;

pub use builder::FireGridBuilder;
pub use error::GridError;
pub(crate) use fire_grid::check_size;
pub use fire_grid::{FireGrid, MIN_SIZE};
pub use geometry::{GridDimensions, GridGeometry};
pub use simulation::FireSimulation;
