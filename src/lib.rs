pub mod board;
pub mod camera;
pub mod cell;
pub mod config;
pub mod driver;
pub mod events;
pub mod grid;
pub mod io;
pub mod render;
pub mod rules;
pub mod screen;

pub type ScreenSize = u16;
pub type CellOffset = i16;
pub type GridIndex = usize;

/// A `(row, col)` position on the board
pub type Coord = (GridIndex, GridIndex);
