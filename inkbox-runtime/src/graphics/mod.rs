pub mod bitmap;
pub mod text;
pub mod typeface;

use image::{imageops, GrayImage};

use crate::layout::{Pixel, Position};

/// The panel is strictly two-tone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}
impl Color {
    /// Maps a dithered luma sample back onto the panel's two tones
    fn from_luma(value: u8) -> Self {
        if value >= 128 {
            Color::White
        } else {
            Color::Black
        }
    }
}

/// A 1-bit frame, the size of the panel.
///
/// Every write is clipped to the canvas, so callers can draw partially off-screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: Pixel,
    height: Pixel,
    pixels: Vec<Color>,
}
impl Canvas {
    /// A blank (all white) frame
    pub fn new(width: Pixel, height: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::White; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> Pixel {
        self.width
    }

    pub fn height(&self) -> Pixel {
        self.height
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }

    pub fn get(&self, position: Position) -> Option<Color> {
        self.index(position.x as i64, position.y as i64)
            .map(|i| self.pixels[i])
    }

    /// Signed coordinates, for glyphs and strokes that hang off an edge
    pub fn set_signed(&mut self, x: i64, y: i64, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn set(&mut self, position: Position, color: Color) {
        self.set_signed(position.x as i64, position.y as i64, color);
    }

    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == color).count()
    }

    /// Strokes the rectangle between two inclusive corners in black.
    /// The stroke grows inward, `width` pixels deep.
    pub fn stroke_rect(&mut self, top_left: Position, bottom_right: Position, width: Pixel) {
        let (mut x0, mut y0) = (top_left.x as i64, top_left.y as i64);
        let (mut x1, mut y1) = (bottom_right.x as i64, bottom_right.y as i64);

        for _ in 0..width {
            if x0 > x1 || y0 > y1 {
                break;
            }
            for x in x0..=x1 {
                self.set_signed(x, y0, Color::Black);
                self.set_signed(x, y1, Color::Black);
            }
            for y in y0..=y1 {
                self.set_signed(x0, y, Color::Black);
                self.set_signed(x1, y, Color::Black);
            }
            x0 += 1;
            y0 += 1;
            x1 -= 1;
            y1 -= 1;
        }
    }

    /// Pastes a grayscale image with its top-left corner at `position`.
    ///
    /// The image is Floyd–Steinberg dithered down to two tones first;
    /// the source is left untouched.
    pub fn paste_gray(&mut self, image: &GrayImage, position: Position) {
        let mut dithered = image.clone();
        imageops::dither(&mut dithered, &imageops::BiLevel);

        for (x, y, pixel) in dithered.enumerate_pixels() {
            self.set_signed(
                position.x as i64 + x as i64,
                position.y as i64 + y as i64,
                Color::from_luma(pixel.0[0]),
            );
        }
    }

    /// Packs the frame the way Waveshare-style panels take it:
    /// rows of `ceil(width / 8)` bytes, most significant bit first, set bits are white.
    pub fn to_panel_buffer(&self) -> Vec<u8> {
        let stride = (self.width as usize).div_ceil(8);
        let mut buffer = vec![0u8; stride * self.height as usize];

        for (i, pixel) in self.pixels.iter().enumerate() {
            if *pixel == Color::White {
                let x = i % self.width as usize;
                let y = i / self.width as usize;
                buffer[y * stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn pos(x: Pixel, y: Pixel) -> Position {
        Position { x, y }
    }

    #[test]
    fn starts_white() {
        let canvas = Canvas::new(16, 4);
        assert_eq!(canvas.count(Color::White), 64);
        assert_eq!(canvas.get(pos(15, 3)), Some(Color::White));
        assert_eq!(canvas.get(pos(16, 0)), None);
    }

    #[test]
    fn writes_off_canvas_are_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.set_signed(-1, 2, Color::Black);
        canvas.set(pos(4, 0), Color::Black);
        assert_eq!(canvas.count(Color::Black), 0);
    }

    #[test]
    fn stroke_outlines_inclusive_corners() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(pos(1, 1), pos(4, 3), 1);

        // 4 wide, 3 tall perimeter
        assert_eq!(canvas.count(Color::Black), 10);
        assert_eq!(canvas.get(pos(1, 1)), Some(Color::Black));
        assert_eq!(canvas.get(pos(4, 3)), Some(Color::Black));
        assert_eq!(canvas.get(pos(2, 2)), Some(Color::White));
        assert_eq!(canvas.get(pos(5, 1)), Some(Color::White));
    }

    #[test]
    fn wide_stroke_grows_inward() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(pos(0, 0), pos(5, 5), 2);
        assert_eq!(canvas.get(pos(1, 1)), Some(Color::Black));
        assert_eq!(canvas.get(pos(2, 2)), Some(Color::White));
        assert_eq!(canvas.get(pos(6, 6)), Some(Color::White));
    }

    #[test]
    fn zero_width_stroke_draws_nothing() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(pos(0, 0), pos(5, 5), 0);
        assert_eq!(canvas.count(Color::Black), 0);
    }

    #[test]
    fn paste_thresholds_flat_tones() {
        let mut canvas = Canvas::new(8, 8);
        let black = GrayImage::from_pixel(3, 2, Luma([0]));
        canvas.paste_gray(&black, pos(6, 7));

        // only the 2x1 corner that lands on the canvas is painted
        assert_eq!(canvas.count(Color::Black), 2);
        assert_eq!(canvas.get(pos(7, 7)), Some(Color::Black));

        let white = GrayImage::from_pixel(8, 8, Luma([255]));
        canvas.paste_gray(&white, pos(0, 0));
        assert_eq!(canvas.count(Color::Black), 0);
    }

    #[test]
    fn paste_dithers_mid_gray() {
        let mut canvas = Canvas::new(16, 16);
        let gray = GrayImage::from_pixel(16, 16, Luma([128]));
        canvas.paste_gray(&gray, pos(0, 0));

        let black = canvas.count(Color::Black);
        assert!(black > 64 && black < 192, "{black} black pixels");
    }

    #[test]
    fn panel_buffer_packs_msb_first() {
        let mut canvas = Canvas::new(10, 2);
        canvas.set(pos(0, 0), Color::Black);
        canvas.set(pos(9, 1), Color::Black);

        let buffer = canvas.to_panel_buffer();
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer[0], 0b0111_1111);
        // trailing bits past the row end stay clear
        assert_eq!(buffer[1], 0b1100_0000);
        assert_eq!(buffer[2], 0xff);
        assert_eq!(buffer[3], 0b1000_0000);
    }
}
