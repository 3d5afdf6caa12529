//! Row-major index arithmetic shared by grids and strategies
//!
//! Every conversion here uses the same convention:
//! `index = row * width + column` and `location = (index / width, index % width)`.
//! Square and non-square grids are both covered by this single rule.

use crate::core_types::GridLocation;

/// Width/height of a rectangular grid plus the conversions derived from them.
///
/// Neighbour strategies receive a `&dyn GridGeometry` so they can compute
/// bounds and indices without seeing the grid's snapshot or mutating it.
pub trait GridGeometry {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Total number of cells
    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Flat index of `(row, column)`
    fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.width() + column
    }

    /// Location of the cell at flat `index`
    fn location_of(&self, index: usize) -> GridLocation {
        GridLocation::new(index / self.width(), index % self.width())
    }

    /// Whether `(row, column)` lies inside the grid
    fn contains(&self, row: usize, column: usize) -> bool {
        row < self.height() && column < self.width()
    }

    /// Whether `(row, column)` lies on the outer edge of the grid
    fn is_border(&self, row: usize, column: usize) -> bool {
        row == 0 || row + 1 == self.height() || column == 0 || column + 1 == self.width()
    }
}

/// Plain grid dimensions.
///
/// Useful wherever geometry is needed without a full grid, e.g. when
/// exercising a neighbour strategy against a hand-built snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub width: usize,
    pub height: usize,
}

impl GridDimensions {
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl GridGeometry for GridDimensions {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifies_row_and_column() {
        let grid = GridDimensions::new(7, 7);
        assert_eq!(grid.location_of(23), GridLocation::new(3, 2));
    }

    #[test]
    fn test_identifies_index() {
        let grid = GridDimensions::new(7, 7);
        assert_eq!(grid.index_of(3, 2), 23);
    }

    #[test]
    fn test_identifies_boundary() {
        let grid = GridDimensions::new(7, 7);
        assert!(grid.is_border(0, 0));
        assert!(grid.is_border(6, 3));
        assert!(grid.is_border(3, 6));
        assert!(!grid.is_border(3, 3));
        assert!(!grid.is_border(1, 5));
    }

    #[test]
    fn test_non_square_round_trips() {
        // Wide grid: 9 columns, 4 rows
        let wide = GridDimensions::new(9, 4);
        assert_eq!(wide.index_of(2, 7), 25);
        assert_eq!(wide.location_of(25), GridLocation::new(2, 7));
        assert_eq!(wide.location_of(wide.cell_count() - 1), GridLocation::new(3, 8));

        // Tall grid: 4 columns, 9 rows
        let tall = GridDimensions::new(4, 9);
        assert_eq!(tall.index_of(7, 2), 30);
        assert_eq!(tall.location_of(30), GridLocation::new(7, 2));
        assert_eq!(tall.location_of(tall.cell_count() - 1), GridLocation::new(8, 3));

        for grid in [wide, tall] {
            for index in 0..grid.cell_count() {
                let location = grid.location_of(index);
                assert!(grid.contains(location.row(), location.column()));
                assert_eq!(grid.index_of(location.row(), location.column()), index);
            }
        }
    }

    #[test]
    fn test_non_square_border_uses_each_axis() {
        let wide = GridDimensions::new(9, 4);
        assert!(wide.is_border(3, 4)); // last row
        assert!(wide.is_border(1, 8)); // last column
        assert!(!wide.is_border(2, 7));
        assert!(!wide.contains(4, 0));
        assert!(!wide.contains(0, 9));
    }
}
