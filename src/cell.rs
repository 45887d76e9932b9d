use crate::CellOffset;

/// State of a single grid unit.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// Relative `(row, col)` offsets of the Moore neighbourhood
///
/// ```notrust
///   (-1,-1) (-1, 0) (-1, 1)
///   ( 0,-1)    x    ( 0, 1)
///   ( 1,-1) ( 1, 0) ( 1, 1)
/// ```
pub const NEIGHBOURS: [(CellOffset, CellOffset); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
