use crate::Coord;
use crate::camera::Camera;
use crate::screen::Screen;

/// Draws the gridlines (if `gridlines` is set) and one filled rectangle per active cell.
///
/// The camera is expected to cover the screen, pixel for pixel.
pub fn draw_board(cam: &mut Camera, screen: &Screen, cells: &[Coord], gridlines: bool) {
    cam.reset();

    if gridlines {
        for y in screen.horizontal_lines() {
            cam.draw_hline(y as usize);
        }

        for x in screen.vertical_lines() {
            cam.draw_vline(x as usize);
        }
    }

    for &(row, col) in cells {
        draw_cell(cam, screen, row, col);
    }
}

fn draw_cell(cam: &mut Camera, screen: &Screen, row: usize, col: usize) {
    let (x, y) = screen.screen_position(row, col);

    // Cells are at least a pixel wide, even on a screen too small for the grid
    let x1 = (x + screen.cell_width()).max(x + 1f64);
    let y1 = (y + screen.cell_height()).max(y + 1f64);

    cam.fill_rect(x as usize, y as usize, x1 as usize, y1 as usize);
}
