/// Input of the front end, independent of the terminal library producing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Paint the cell under the screen pixel `(x, y)`
    Paint { x: i32, y: i32 },

    /// Start the simulation when painting, reset the board when simulating
    Toggle,

    ToggleGridlines,

    /// The terminal was resized to `cols x rows` characters
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
