//! Error types for grid construction

use std::fmt;

/// Errors raised while building a [`FireGrid`](super::FireGrid).
///
/// Stepping and rendering are total, so construction is the only place a
/// grid can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension is below the minimum grid size.
    InvalidDimension {
        /// Which parameter was rejected (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
    },
    /// Width times height does not fit in a `usize`.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value, min } => {
                write!(f, "grid {name} must be at least {min}, got {value}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid of {width}x{height} cells is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}
