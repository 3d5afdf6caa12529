//! Compass directions used for neighbour sampling

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight compass points around a cell.
///
/// The declaration order is the iteration order used everywhere a
/// deterministic ordering of directions is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// North, east, south and west
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions
    pub const DIAGONALS: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Stable position of the direction in [`Direction::ALL`]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// `(d_row, d_column)` step towards the neighbour in this direction.
    ///
    /// North decreases the row, east increases the column.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// True for north, east, south and west
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::East | Self::South | Self::West)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_follow_declaration_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.ordinal(), i);
        }
    }

    #[test]
    fn test_offsets_are_unit_steps() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.offset();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert_ne!((dr, dc), (0, 0));
        }
    }

    #[test]
    fn test_cardinals_and_diagonals_partition_all() {
        assert!(Direction::CARDINALS.iter().all(|d| d.is_cardinal()));
        assert!(Direction::DIAGONALS.iter().all(|d| !d.is_cardinal()));
        assert_eq!(Direction::CARDINALS.len() + Direction::DIAGONALS.len(), 8);
    }
}
