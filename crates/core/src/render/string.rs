//! Text renderer

use super::Renderer;
use crate::core_types::{Cell, CellState};
use std::fmt;

const COLUMN_SEPARATOR: &str = " ";
const ROW_TERMINATOR: &str = "\n";

/// Text used for each cell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub empty: String,
    pub tree: String,
    pub burning: String,
}

impl Glyphs {
    #[must_use]
    pub fn new(empty: impl Into<String>, tree: impl Into<String>, burning: impl Into<String>) -> Self {
        Self {
            empty: empty.into(),
            tree: tree.into(),
            burning: burning.into(),
        }
    }

    /// Glyph for `state`
    #[must_use]
    pub fn for_state(&self, state: CellState) -> &str {
        match state {
            CellState::Empty => &self.empty,
            CellState::Tree => &self.tree,
            CellState::Burning => &self.burning,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new("O", "!", "^")
    }
}

/// Renders a grid into a string, one line per row with cells separated by a
/// single space.
///
/// Output accumulates across renders until [`clear`](Self::clear) is called.
#[derive(Debug, Clone, Default)]
pub struct StringRenderer {
    glyphs: Glyphs,
    buffer: String,
}

impl StringRenderer {
    /// Renderer with the default glyphs (`O` empty, `!` tree, `^` burning)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_glyphs(glyphs: Glyphs) -> Self {
        Self {
            glyphs,
            buffer: String::new(),
        }
    }

    #[must_use]
    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    /// Everything rendered so far
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Drop the rendered output, keeping the glyphs
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Renderer for StringRenderer {
    fn render_cell(&mut self, cell: &Cell) {
        self.buffer.push_str(self.glyphs.for_state(cell.state()));
    }

    fn advance_column(&mut self) -> bool {
        self.buffer.push_str(COLUMN_SEPARATOR);
        true
    }

    fn advance_row(&mut self) -> bool {
        self.buffer.push_str(ROW_TERMINATOR);
        true
    }
}

impl fmt::Display for StringRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}
