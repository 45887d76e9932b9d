/// Hex values of braille dots
///
/// ```notrust
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Pixels covered by one braille character, horizontally
pub const DOTS_X: usize = 2;

/// Pixels covered by one braille character, vertically
pub const DOTS_Y: usize = 4;

/// A terminal framebuffer where every character holds `2x4` pixels.
pub struct Camera {
    /// The pixel buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // With `bw = ceil(w / 2)` and `bh = ceil(h / 4)` braille characters, this gives us a
        // framebuffer of length `3 * (bw * bh) + bh`.
        let (bw, bh) = (w.div_ceil(DOTS_X), h.div_ceil(DOTS_Y));

        Self {
            cb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// Camera covering a terminal of `cols x rows` characters
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize * DOTS_X, rows as usize * DOTS_Y)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Turns on every pixel in `[x0, x1) x [y0, y1)`. The rectangle is clipped to the framebuffer.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        let (x1, y1) = (x1.min(self.w), y1.min(self.h));

        for y in y0..y1 {
            for x in x0..x1 {
                let i = self.xy_from(x, y);
                self.cb[i] = true;
            }
        }
    }

    pub fn draw_hline(&mut self, y: usize) {
        self.fill_rect(0, y, self.w, y + 1);
    }

    pub fn draw_vline(&mut self, x: usize) {
        self.fill_rect(x, 0, x + 1, self.h);
    }

    /// Reset the pixel buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Packs the pixel buffer into braille characters, one line of text per 4 rows of pixels.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(DOTS_X);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / DOTS_Y) * bw + (x / DOTS_X)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint lies in U+2800..=U+28FF
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Camera;

    #[test]
    fn empty() {
        let mut cam = Camera::new(4, 4);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn single_dots() {
        let mut cam = Camera::new(2, 4);

        cam.draw_pixel(0, 0);
        assert_eq!(cam.render(), "\u{2801}\n");

        cam.reset();
        cam.draw_pixel(1, 3);
        assert_eq!(cam.render(), "\u{2880}\n");
    }

    #[test]
    fn full_character() {
        let mut cam = Camera::new(2, 4);

        cam.fill_rect(0, 0, 2, 4);

        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut cam = Camera::new(4, 4);

        cam.fill_rect(2, 0, 100, 100);

        assert_eq!(cam.render(), "\u{2800}\u{28FF}\n");
    }

    #[test]
    fn lines() {
        let mut cam = Camera::for_terminal(2, 2);
        assert_eq!((cam.width(), cam.height()), (4, 8));

        cam.draw_vline(0);
        cam.draw_hline(7);

        // left column is `1 + 2 + 4 + 40`, bottom row adds `40` and `80`
        assert_eq!(cam.render(), "\u{2847}\u{2800}\n\u{28C7}\u{28C0}\n");
    }

    #[test]
    #[should_panic(expected = "x is out of bounds")]
    fn draw_pixel_out_of_bounds() {
        Camera::new(2, 4).draw_pixel(2, 0);
    }
}
