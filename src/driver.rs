use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::trace;

use crate::board::Board;
use crate::board::BoardError;
use crate::config;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Painting,
    Simulation,
}

/// Decides when the board is painted on, started, advanced and reset.
///
/// The driver never reads the clock itself: every time sensitive call takes the current
/// [`Instant`].
pub struct Driver {
    board: Board,
    mode: Mode,

    /// Minimum time between two generations
    tick: Duration,

    /// Minimum time between two accepted toggles
    input_delay: Duration,

    last_tick: Instant,

    /// Starts at construction, so a toggle right after start up is ignored too
    last_toggle: Instant,
}

impl Driver {
    pub fn new(board: Board, now: Instant) -> Self {
        Self::with_timings(board, now, config::TICK_DURATION, config::INPUT_DELAY)
    }

    pub fn with_timings(board: Board, now: Instant, tick: Duration, input_delay: Duration) -> Self {
        Self {
            board,
            mode: Mode::Painting,
            tick,
            input_delay,
            last_tick: now,
            last_toggle: now,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Stage the cell under the screen position `(x, y)`. Does nothing unless painting, or when
    /// the position is not over a cell.
    pub fn paint(&mut self, screen: &Screen, x: i32, y: i32) -> Result<(), BoardError> {
        if self.mode != Mode::Painting {
            return Ok(());
        }

        let Some(cell) = screen.grid_index(x, y) else {
            trace!(x, y, "Paint outside of the screen");
            return Ok(());
        };

        self.board.add_active_cell(cell)
    }

    /// Start the simulation when painting, reset the board when simulating. Toggles closer than
    /// the input delay to the last accepted one are ignored.
    ///
    /// Returns whether the toggle was accepted.
    pub fn toggle(&mut self, now: Instant) -> Result<bool, BoardError> {
        if now.saturating_duration_since(self.last_toggle) < self.input_delay {
            trace!("Toggle ignored, too soon after the last one");
            return Ok(false);
        }

        match self.mode {
            Mode::Painting => {
                self.board.start_simulation()?;
                self.last_tick = now;
                self.mode = Mode::Simulation;
            }
            Mode::Simulation => {
                self.board.reset();
                self.mode = Mode::Painting;
            }
        }

        debug!(mode = ?self.mode, "Switched mode");
        self.last_toggle = now;

        Ok(true)
    }

    /// Advance the board by one generation if simulating and a full tick elapsed since the last
    /// one.
    ///
    /// Returns whether a generation was advanced.
    pub fn tick(&mut self, now: Instant) -> Result<bool, BoardError> {
        if self.mode != Mode::Simulation {
            return Ok(false);
        }

        if now.saturating_duration_since(self.last_tick) < self.tick {
            return Ok(false);
        }

        self.board.update_board()?;
        self.last_tick = now;

        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;
    use std::time::Instant;

    use super::Driver;
    use super::Mode;
    use crate::board::Board;
    use crate::screen::Screen;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn paint_maps_pixels() {
        let t = Instant::now();
        let screen = Screen::new(50, 30, 3, 5);
        let mut driver = Driver::new(Board::with_size(3, 5), t);

        driver.paint(&screen, 5, 15).unwrap();
        driver.paint(&screen, 15, 15).unwrap();
        driver.paint(&screen, 15, 15).unwrap();
        driver.paint(&screen, -3, 15).unwrap();

        assert_eq!(driver.board().active_cells(), vec![(1, 0), (1, 1)]);

        // the far edge maps past the board
        assert!(driver.paint(&screen, 50, 30).is_err());
    }

    #[test]
    fn toggle_starts_then_resets() {
        let t = Instant::now();
        let screen = Screen::new(50, 30, 3, 5);
        let mut driver = Driver::new(Board::with_size(3, 5), t);

        driver.paint(&screen, 5, 15).unwrap();

        assert!(driver.toggle(t + ms(500)).unwrap());
        assert_eq!(driver.mode(), Mode::Simulation);
        assert!(driver.board().is_running());

        // painting is ignored while simulating
        driver.paint(&screen, 45, 25).unwrap();
        assert_eq!(driver.board().active_cells(), vec![(1, 0)]);

        assert!(driver.toggle(t + ms(1000)).unwrap());
        assert_eq!(driver.mode(), Mode::Painting);
        assert_eq!(driver.board(), &Board::with_size(3, 5));
    }

    #[test]
    fn toggle_is_debounced() {
        let t = Instant::now();
        let mut driver = Driver::new(Board::with_size(3, 3), t);

        // the delay also runs from start up
        assert!(!driver.toggle(t).unwrap());
        assert!(!driver.toggle(t + ms(499)).unwrap());
        assert_eq!(driver.mode(), Mode::Painting);

        assert!(driver.toggle(t + ms(500)).unwrap());
        assert!(!driver.toggle(t + ms(600)).unwrap());
        assert!(!driver.toggle(t + ms(999)).unwrap());
        assert_eq!(driver.mode(), Mode::Simulation);

        assert!(driver.toggle(t + ms(1100)).unwrap());
        assert_eq!(driver.mode(), Mode::Painting);

        // the delay counts from the last accepted toggle
        assert!(!driver.toggle(t + ms(1500)).unwrap());
        assert!(driver.toggle(t + ms(1600)).unwrap());
    }

    #[test]
    fn custom_timings() {
        let t = Instant::now();
        let screen = Screen::new(30, 30, 3, 3);
        let mut driver = Driver::with_timings(Board::with_size(3, 3), t, ms(200), ms(0));

        for x in [5, 15, 25] {
            driver.paint(&screen, x, 15).unwrap();
        }

        // no input delay, the first toggle goes through
        assert!(driver.toggle(t).unwrap());

        assert!(!driver.tick(t + ms(50)).unwrap());
        assert!(!driver.tick(t + ms(199)).unwrap());
        assert!(driver.tick(t + ms(200)).unwrap());
        assert_eq!(driver.board().active_cells(), vec![(0, 1), (1, 1), (2, 1)]);

        assert!(driver.toggle(t + ms(201)).unwrap());
        assert_eq!(driver.mode(), Mode::Painting);
    }

    #[test]
    fn ticks() {
        let t = Instant::now();
        let screen = Screen::new(50, 30, 3, 5);
        let mut driver = Driver::new(Board::with_size(3, 5), t);

        for x in [5, 15, 25] {
            driver.paint(&screen, x, 15).unwrap();
        }

        // nothing happens before the simulation starts
        assert!(!driver.tick(t + ms(1000)).unwrap());

        let start = t + ms(1000);
        driver.toggle(start).unwrap();

        assert!(!driver.tick(start + ms(10)).unwrap());
        assert!(driver.tick(start + ms(50)).unwrap());
        assert_eq!(driver.board().active_cells(), vec![(0, 1), (1, 1), (2, 1)]);

        assert!(!driver.tick(start + ms(99)).unwrap());
        assert!(driver.tick(start + ms(100)).unwrap());
        assert_eq!(driver.board().generation(), 2);
    }
}
