//! The fire grid state machine
//!
//! A [`FireGrid`] owns exactly one snapshot of cells at a time. Each step
//! reads the current snapshot, builds a complete successor and swaps it in;
//! no cell is ever changed in place.

use super::{FireGridBuilder, FireSimulation, GridDimensions, GridError, GridGeometry};
use crate::config::SimulationConfig;
use crate::core_types::{Cell, CellState, GridLocation};
use crate::neighbour::NeighbourStrategy;
use crate::render::Renderer;
use crate::spread::{SpreadStrategy, SpreadWith};
use tracing::{debug, info, warn};

/// Smallest accepted width and height
pub const MIN_SIZE: usize = 3;

/// Rectangular fire-spread cellular automaton
///
/// Border cells are Empty forever. Every other cell starts as a Tree except
/// the ignition cell, which starts Burning. The grid is *completed* once no
/// cell is Burning; from then on [`spread`](Self::spread) does nothing.
#[derive(Debug)]
pub struct FireGrid {
    width: usize,
    height: usize,
    ignition: GridLocation,
    cells: Vec<Cell>,
    neighbour_strategy: Box<dyn NeighbourStrategy>,
    spread_strategy: Box<dyn SpreadStrategy>,
    completed: bool,
    step_count: usize,
}

impl FireGrid {
    /// Create a grid with centre ignition and the default strategies
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] if `width` or `height` is below [`MIN_SIZE`],
    /// [`GridError::TooLarge`] if the cell count does not fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::builder(width, height).build()
    }

    /// Start configuring a grid
    #[must_use]
    pub fn builder(width: usize, height: usize) -> FireGridBuilder {
        FireGridBuilder::new(width, height)
    }

    /// Create a grid from a [`SimulationConfig`]
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] or [`GridError::TooLarge`] for a bad
    /// configured size.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, GridError> {
        let mut builder = Self::builder(config.width, config.height)
            .neighbour_strategy(Box::new(config.neighbourhood.strategy()))
            .spread_strategy(config.spread_rule.strategy());
        if let Some(ignition) = config.ignition {
            builder = builder.ignition(ignition);
        }
        builder.build()
    }

    /// Validate dimensions and lay out the initial snapshot
    pub(super) fn assemble(
        width: usize,
        height: usize,
        ignition: Option<GridLocation>,
        neighbour_strategy: Box<dyn NeighbourStrategy>,
        spread_strategy: Box<dyn SpreadStrategy>,
    ) -> Result<Self, GridError> {
        check_size(width, height)?;

        let ignition = ignition.unwrap_or(GridLocation::new(height / 2, width / 2));
        let geometry = GridDimensions::new(width, height);
        let cells: Vec<Cell> = (0..geometry.cell_count())
            .map(|index| {
                let location = geometry.location_of(index);
                let is_boundary = geometry.is_border(location.row(), location.column());
                let state = if is_boundary {
                    CellState::Empty
                } else if location == ignition {
                    CellState::Burning
                } else {
                    CellState::Tree
                };
                Cell::new(index, location, state, is_boundary)
            })
            .collect();

        let grid = Self {
            width,
            height,
            ignition,
            completed: !cells.iter().any(|c| c.state() == CellState::Burning),
            cells,
            neighbour_strategy,
            spread_strategy,
            step_count: 0,
        };

        if grid.completed {
            warn!(
                "Ignition at {} cannot burn on a {}x{} grid (border or outside); grid starts completed",
                ignition, width, height
            );
        }
        info!(
            "Fire grid initialized: {}x{}, ignition at {}, spread rule {}",
            width,
            height,
            ignition,
            grid.spread_strategy.name()
        );

        Ok(grid)
    }

    /// Whether no cell is Burning
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Current snapshot in index order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at flat `index`, if inside the grid
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell at `(row, column)`, if inside the grid
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&Cell> {
        if self.contains(row, column) {
            self.cells.get(self.index_of(row, column))
        } else {
            None
        }
    }

    /// Ignition location the grid was built with
    pub fn ignition(&self) -> GridLocation {
        self.ignition
    }

    /// Number of steps run so far
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn burning_count(&self) -> usize {
        self.count_in_state(CellState::Burning)
    }

    /// Number of cells currently in `state`
    pub fn count_in_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// The grid's default spread rule
    pub fn spread_strategy(&self) -> &dyn SpreadStrategy {
        self.spread_strategy.as_ref()
    }

    /// Advance the simulation by one step
    ///
    /// Every cell's next state is computed from the current snapshot only,
    /// then the whole snapshot is replaced at once.
    ///
    /// # Arguments
    ///
    /// * `with` - Rule for this step; [`SpreadWith::Default`] uses the grid's own
    ///
    /// # Returns
    ///
    /// `false` without touching the snapshot if the grid was already completed
    pub fn spread(&mut self, with: SpreadWith<'_>) -> bool {
        if self.completed {
            return false;
        }

        let grid: &Self = self;
        let strategy: &dyn SpreadStrategy = match with {
            SpreadWith::Default => grid.spread_strategy.as_ref(),
            SpreadWith::Strategy(strategy) => strategy,
        };

        let next: Vec<Cell> = grid
            .cells
            .iter()
            .map(|cell| {
                let neighbours = grid.neighbour_strategy.neighbours(grid, &grid.cells, cell);
                cell.with_state(strategy.spread(cell, &neighbours))
            })
            .collect();

        self.cells = next;
        self.step_count += 1;

        let burning = self.burning_count();
        self.completed = burning == 0;

        debug!(
            "Step {}: {} burning, {} trees, completed={}",
            self.step_count,
            burning,
            self.count_in_state(CellState::Tree),
            self.completed
        );

        true
    }

    /// Push the current snapshot to `renderer`
    ///
    /// Cells are visited in index order. Entering a new row signals
    /// `advance_row`, moving along a row signals `advance_column`, and the
    /// very first cell gets neither.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let mut last: Option<GridLocation> = None;

        for cell in &self.cells {
            let location = cell.location();
            if let Some(previous) = last {
                if location.row() > previous.row() {
                    renderer.advance_row();
                } else if location.column() > previous.column() {
                    renderer.advance_column();
                }
            }
            last = Some(location);
            renderer.render_cell(cell);
        }
    }
}

/// Reject dimensions below [`MIN_SIZE`] or whose cell count overflows
pub(crate) fn check_size(width: usize, height: usize) -> Result<(), GridError> {
    check_dimension("width", width)?;
    check_dimension("height", height)?;
    match width.checked_mul(height) {
        Some(_) => Ok(()),
        None => Err(GridError::TooLarge { width, height }),
    }
}

fn check_dimension(name: &'static str, value: usize) -> Result<(), GridError> {
    if value < MIN_SIZE {
        return Err(GridError::InvalidDimension {
            name,
            value,
            min: MIN_SIZE,
        });
    }
    Ok(())
}

impl GridGeometry for FireGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl FireSimulation for FireGrid {
    fn is_completed(&self) -> bool {
        FireGrid::is_completed(self)
    }

    fn step_count(&self) -> usize {
        FireGrid::step_count(self)
    }

    fn spread(&mut self, with: SpreadWith<'_>) -> bool {
        FireGrid::spread(self, with)
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        FireGrid::render(self, renderer);
    }
}
