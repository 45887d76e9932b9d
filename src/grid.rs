use std::fmt;

use crate::Coord;
use crate::GridIndex;
use crate::cell::CellState;
use crate::cell::NEIGHBOURS;
use crate::rules;
use crate::rules::Transition;

/// A fixed size `rows x cols` grid of cells.
///
/// Cells are stored row-major in a flat buffer, so `(row, col)` lives at `row * cols + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: GridIndex,
    cols: GridIndex,
    cells: Vec<CellState>,
}

/// The cells that changed during a single generation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub births: Vec<Coord>,
    pub deaths: Vec<Coord>,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(rows: GridIndex, cols: GridIndex) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Dead; rows * cols],
        }
    }

    pub fn rows(&self) -> GridIndex {
        self.rows
    }

    pub fn cols(&self) -> GridIndex {
        self.cols
    }

    /// Whether `(row, col)` lies on the grid
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, cell: Coord) -> Option<CellState> {
        if !self.contains(cell) {
            return None;
        }

        Some(self.cells[self.at(cell)])
    }

    pub fn set(&mut self, cell: Coord, state: CellState) {
        assert!(self.contains(cell), "cell {cell:?} is out of bounds");

        let i = self.at(cell);
        self.cells[i] = state;
    }

    /// Number of live cells in the Moore neighbourhood of `(row, col)`.
    ///
    /// The grid does not wrap: neighbours falling outside of it are never counted.
    pub fn neighbour_count(&self, (row, col): Coord) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBOURS {
            let (Some(r), Some(c)) = (
                row.checked_add_signed(dr as isize),
                col.checked_add_signed(dc as isize),
            ) else {
                continue;
            };

            if self.get((r, c)).is_some_and(CellState::is_alive) {
                n += 1;
            }
        }

        n
    }

    /// Advance the grid by one generation.
    ///
    /// Every neighbour count is taken from the current generation before any cell is touched,
    /// then all deaths and all births are applied. The two sets are disjoint: deaths only come
    /// from live cells and births only from dead ones.
    pub fn step(&mut self) -> Step {
        let mut step = Step::default();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let state = self.cells[self.at((row, col))];
                let neighbours = self.neighbour_count((row, col));

                match rules::next_state(state, neighbours) {
                    Transition::Birth => step.births.push((row, col)),
                    Transition::Death => step.deaths.push((row, col)),
                    Transition::Unchanged => {}
                }
            }
        }

        for &cell in &step.deaths {
            self.set(cell, CellState::Dead);
        }

        for &cell in &step.births {
            self.set(cell, CellState::Alive);
        }

        step
    }

    /// Every live cell, in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, state)| state.is_alive())
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    fn at(&self, (row, col): Coord) -> usize {
        row * self.cols + col
    }
}

/// Dumps the grid one row per line, `#` for a live cell and `.` for a dead one.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for state in row {
                let c = if state.is_alive() { '#' } else { '.' };
                write!(f, "{c}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
