//! Rendering of grid snapshots
//!
//! The grid walks its snapshot in row-major order and pushes each cell to a
//! [`Renderer`], interleaved with column and row advance signals. What the
//! output looks like is entirely up to the renderer.

mod string;

pub use string::{Glyphs, StringRenderer};

use crate::core_types::Cell;

/// Receives a grid traversal.
///
/// For every cell the grid calls at most one of [`advance_row`](Self::advance_row)
/// or [`advance_column`](Self::advance_column), then
/// [`render_cell`](Self::render_cell). The first cell gets neither advance.
pub trait Renderer {
    /// Draw one cell at the current position
    fn render_cell(&mut self, cell: &Cell);

    /// Move to the next column of the current row
    ///
    /// # Returns
    ///
    /// Whether the advance succeeded. The grid does not act on the result.
    fn advance_column(&mut self) -> bool;

    /// Move to the first column of the next row
    ///
    /// # Returns
    ///
    /// Whether the advance succeeded. The grid does not act on the result.
    fn advance_row(&mut self) -> bool;
}
