use std::time::Duration;

use crate::GridIndex;
use crate::ScreenSize;

/// Number of rows on the board
pub const NUM_ROWS: GridIndex = 40;

/// Number of columns on the board
pub const NUM_COLS: GridIndex = 40;

/// Time between two generations while the simulation is running
pub const TICK_DURATION: Duration = Duration::from_millis(50);

/// Minimum time between two accepted start/reset triggers
pub const INPUT_DELAY: Duration = Duration::from_millis(500);

/// Default screen width in pixels
pub const SCR_WIDTH: ScreenSize = 1280;

/// Default screen height in pixels
pub const SCR_HEIGHT: ScreenSize = 720;

pub const FRAMERATE: u64 = 60;
pub const FRAMETIME: Duration = Duration::from_nanos(1_000_000_000 / FRAMERATE);
