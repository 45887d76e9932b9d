use crate::Coord;
use crate::GridIndex;
use crate::ScreenSize;
use crate::config;

/// Maps between screen pixels and cells of a `rows x cols` board stretched over the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    /// Width of the screen in pixels
    pub width: ScreenSize,

    /// Height of the screen in pixels
    pub height: ScreenSize,

    pub rows: GridIndex,
    pub cols: GridIndex,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(
            config::SCR_WIDTH,
            config::SCR_HEIGHT,
            config::NUM_ROWS,
            config::NUM_COLS,
        )
    }
}

impl Screen {
    pub fn new(width: ScreenSize, height: ScreenSize, rows: GridIndex, cols: GridIndex) -> Self {
        assert!(rows > 0 && cols > 0, "a screen needs at least one cell");

        Self {
            width,
            height,
            rows,
            cols,
        }
    }

    /// Width of a single cell in pixels
    pub fn cell_width(&self) -> f64 {
        self.width as f64 / self.cols as f64
    }

    /// Height of a single cell in pixels
    pub fn cell_height(&self) -> f64 {
        self.height as f64 / self.rows as f64
    }

    /// Returns the `(row, col)` of the cell under the screen position `(x, y)`, or `None` if the
    /// position is off screen.
    ///
    /// The far edges `x == width` and `y == height` are on screen and map one past the last
    /// column and row, which the board rejects.
    pub fn grid_index(&self, x: i32, y: i32) -> Option<Coord> {
        if x < 0 || x > self.width as i32 || y < 0 || y > self.height as i32 {
            return None;
        }

        let row = (y as f64 / self.cell_height()) as GridIndex;
        let col = (x as f64 / self.cell_width()) as GridIndex;

        Some((row, col))
    }

    /// Returns the screen position of the top left corner of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` lies outside of the grid.
    pub fn screen_position(&self, row: GridIndex, col: GridIndex) -> (f64, f64) {
        if row >= self.rows || col >= self.cols {
            panic!("row or column out of range: ({row}, {col})");
        }

        (col as f64 * self.cell_width(), row as f64 * self.cell_height())
    }

    /// `y` offsets of the lines separating two rows
    pub fn horizontal_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (1..self.rows).map(|i| i as f64 * self.cell_height())
    }

    /// `x` offsets of the lines separating two columns
    pub fn vertical_lines(&self) -> impl Iterator<Item = f64> + '_ {
        (1..self.cols).map(|i| i as f64 * self.cell_width())
    }
}

#[cfg(test)]
mod test {
    use super::Screen;

    #[test]
    fn default_cell_size() {
        let screen = Screen::default();

        assert_eq!(screen.cell_width(), 32.0);
        assert_eq!(screen.cell_height(), 18.0);
    }

    #[test]
    fn grid_index() {
        let screen = Screen::default();

        assert_eq!(screen.grid_index(0, 0), Some((0, 0)));
        assert_eq!(screen.grid_index(31, 17), Some((0, 0)));
        assert_eq!(screen.grid_index(32, 18), Some((1, 1)));
        assert_eq!(screen.grid_index(650, 100), Some((5, 20)));
        assert_eq!(screen.grid_index(1279, 719), Some((39, 39)));
    }

    #[test]
    fn grid_index_off_screen() {
        let screen = Screen::default();

        assert_eq!(screen.grid_index(-1, 10), None);
        assert_eq!(screen.grid_index(10, -1), None);
        assert_eq!(screen.grid_index(1281, 10), None);
        assert_eq!(screen.grid_index(10, 721), None);

        // the far edge is still on screen, but one past the grid
        assert_eq!(screen.grid_index(1280, 720), Some((40, 40)));
    }

    #[test]
    fn screen_position() {
        let screen = Screen::default();

        assert_eq!(screen.screen_position(0, 0), (0.0, 0.0));
        assert_eq!(screen.screen_position(5, 20), (640.0, 90.0));
        assert_eq!(screen.screen_position(39, 39), (1248.0, 702.0));
    }

    #[test]
    #[should_panic(expected = "row or column out of range")]
    fn screen_position_out_of_range() {
        Screen::default().screen_position(40, 0);
    }

    #[test]
    fn gridlines() {
        let screen = Screen::new(8, 6, 3, 4);

        let h: Vec<f64> = screen.horizontal_lines().collect();
        let v: Vec<f64> = screen.vertical_lines().collect();

        assert_eq!(h, vec![2.0, 4.0]);
        assert_eq!(v, vec![2.0, 4.0, 6.0]);
    }
}
