use crate::cell::CellState;

/// What happens to a cell when moving to the next generation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    Birth,
    Death,
    Unchanged,
}

/// Rules of Conway's Game of Life, B3/S23.
///
/// * A live cell with 1 or no neighbours dies
/// * A live cell with 4 or more neighbours dies
/// * A live cell with 2 or 3 neighbours survives
/// * A dead cell with exactly 3 neighbours becomes alive
///
/// See: https://conwaylife.com/wiki/Rulestring
pub fn next_state(state: CellState, neighbours: u8) -> Transition {
    match (state, neighbours) {
        (CellState::Alive, 0..=1) | (CellState::Alive, 4..) => Transition::Death,
        (CellState::Dead, 3) => Transition::Birth,
        _ => Transition::Unchanged,
    }
}

#[cfg(test)]
mod test {
    use super::Transition;
    use super::next_state;
    use crate::cell::CellState;

    #[test]
    fn births() {
        for n in 0..=8 {
            let want = if n == 3 {
                Transition::Birth
            } else {
                Transition::Unchanged
            };

            assert_eq!(next_state(CellState::Dead, n), want, "dead cell with {n} neighbours");
        }
    }

    #[test]
    fn survivals_and_deaths() {
        for n in 0..=8 {
            let want = if n == 2 || n == 3 {
                Transition::Unchanged
            } else {
                Transition::Death
            };

            assert_eq!(next_state(CellState::Alive, n), want, "live cell with {n} neighbours");
        }
    }
}
