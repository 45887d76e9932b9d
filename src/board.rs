use std::fmt;

use thiserror::Error;
use tracing::debug;
use tracing::warn;

use crate::Coord;
use crate::GridIndex;
use crate::cell::CellState;
use crate::config;
use crate::grid::Grid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot advance the board before simulation has started")]
    NotRunning,

    #[error("The simulation is already running, reset the board first")]
    AlreadyRunning,

    #[error("Cell ({row}, {col}) is outside of the {rows}x{cols} board")]
    OutOfBounds {
        row: GridIndex,
        col: GridIndex,
        rows: GridIndex,
        cols: GridIndex,
    },
}

/// Which of the two sources holds the active cells of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The user is painting. Cells are staged, the grid does not exist yet.
    Painting { staged: Vec<Coord> },

    /// The simulation is running and the grid is the only source of truth.
    Simulating { grid: Grid, generation: u64 },
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Painting { staged: Vec::new() }
    }
}

impl Phase {
    /// Commit the staged cells to a fresh `rows x cols` grid.
    ///
    /// A phase that is already simulating is returned as-is.
    pub fn start(self, rows: GridIndex, cols: GridIndex) -> Self {
        match self {
            Phase::Painting { staged } => Phase::Simulating {
                grid: seeded(rows, cols, &staged),
                generation: 0,
            },
            simulating @ Phase::Simulating { .. } => simulating,
        }
    }

    /// Drop whatever the phase holds and go back to an empty painting.
    pub fn reset(self) -> Self {
        Phase::default()
    }
}

/// Conway's Game of Life on a fixed size board.
///
/// The board starts out painting: cells are staged with [`Board::add_active_cell`] and only
/// committed to a grid by [`Board::start_simulation`]. From there [`Board::update_board`] advances
/// the grid one generation at a time, until [`Board::reset`] brings it back to painting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: GridIndex,
    cols: GridIndex,
    phase: Phase,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty `NUM_ROWS x NUM_COLS` board
    pub fn new() -> Self {
        Self::with_size(config::NUM_ROWS, config::NUM_COLS)
    }

    pub fn with_size(rows: GridIndex, cols: GridIndex) -> Self {
        Self {
            rows,
            cols,
            phase: Phase::default(),
        }
    }

    pub fn rows(&self) -> GridIndex {
        self.rows
    }

    pub fn cols(&self) -> GridIndex {
        self.cols
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Simulating { .. })
    }

    /// Number of generations since the simulation started, `0` while painting
    pub fn generation(&self) -> u64 {
        match self.phase {
            Phase::Painting { .. } => 0,
            Phase::Simulating { generation, .. } => generation,
        }
    }

    /// Stage a cell to be alive once the simulation starts. Staging the same cell twice is a
    /// no-op.
    ///
    /// Cells outside of the board are rejected, and so is any cell once the simulation is
    /// running.
    pub fn add_active_cell(&mut self, (row, col): Coord) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            let err = BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            };
            warn!("{err}");

            return Err(err);
        }

        let Phase::Painting { staged } = &mut self.phase else {
            warn!("Ignoring cell ({row}, {col}): {}", BoardError::AlreadyRunning);

            return Err(BoardError::AlreadyRunning);
        };

        if !staged.contains(&(row, col)) {
            staged.push((row, col));
        }

        Ok(())
    }

    /// Seed the grid with the staged cells and start the simulation.
    ///
    /// The staged cells are gone once the simulation runs, so starting a running board reports
    /// [`BoardError::AlreadyRunning`] and leaves the grid as it evolved.
    pub fn start_simulation(&mut self) -> Result<(), BoardError> {
        if self.is_running() {
            warn!("{}", BoardError::AlreadyRunning);

            return Err(BoardError::AlreadyRunning);
        }

        let phase = std::mem::take(&mut self.phase);
        self.phase = phase.start(self.rows, self.cols);

        debug!(population = self.population(), "Simulation started");

        Ok(())
    }

    /// Advance the board by exactly one generation.
    ///
    /// While painting this does nothing and reports [`BoardError::NotRunning`].
    pub fn update_board(&mut self) -> Result<(), BoardError> {
        let Phase::Simulating { grid, generation } = &mut self.phase else {
            warn!("{}", BoardError::NotRunning);

            return Err(BoardError::NotRunning);
        };

        let step = grid.step();
        *generation += 1;

        debug!(
            generation = *generation,
            births = step.births.len(),
            deaths = step.deaths.len(),
            "Advanced board"
        );

        Ok(())
    }

    /// Bring the board back to the state it had right after construction.
    pub fn reset(&mut self) {
        let phase = std::mem::take(&mut self.phase);
        self.phase = phase.reset();

        debug!("Board reset");
    }

    /// Cells to draw: the staged cells while painting, every live cell of the grid once the
    /// simulation is running.
    pub fn active_cells(&self) -> Vec<Coord> {
        match &self.phase {
            Phase::Painting { staged } => staged.clone(),
            Phase::Simulating { grid, .. } => grid.alive_cells().collect(),
        }
    }

    pub fn population(&self) -> usize {
        match &self.phase {
            Phase::Painting { staged } => staged.len(),
            Phase::Simulating { grid, .. } => grid.population(),
        }
    }

    /// Live neighbours of `cell`. While painting, staged cells count as alive.
    pub fn neighbour_count(&self, cell: Coord) -> u8 {
        match &self.phase {
            Phase::Painting { .. } => self.snapshot().neighbour_count(cell),
            Phase::Simulating { grid, .. } => grid.neighbour_count(cell),
        }
    }

    /// The grid as it would look if the simulation started now
    fn snapshot(&self) -> Grid {
        match &self.phase {
            Phase::Painting { staged } => seeded(self.rows, self.cols, staged),
            Phase::Simulating { grid, .. } => grid.clone(),
        }
    }
}

fn seeded(rows: GridIndex, cols: GridIndex, cells: &[Coord]) -> Grid {
    let mut grid = Grid::new(rows, cols);

    for &cell in cells {
        grid.set(cell, CellState::Alive);
    }

    grid
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phase {
            Phase::Simulating { grid, .. } => write!(f, "{grid}"),
            Phase::Painting { .. } => write!(f, "{}", self.snapshot()),
        }
    }
}
