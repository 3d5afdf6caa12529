//! Core value types shared by the grid and its strategies

pub mod cell;
pub mod cell_state;
pub mod direction;
pub mod location;

pub use cell::Cell;
pub use cell_state::CellState;
pub use direction::Direction;
pub use location::GridLocation;
