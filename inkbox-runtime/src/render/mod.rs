/// Text boxes: border, word wrapping, and glyph painting.
pub mod text;

/// Image boxes: rotation, resize policy, and pasting.
pub mod image;

use crate::graphics::Canvas;
use crate::layout::{BoxRect, Pixel, Position};

pub use self::image::{render_image, transform_image, ImageBoxStyle, ResizePolicy};
pub use self::text::render_text_box;

/// Anything that paints itself onto the canvas at a given position
pub trait Drawable {
    fn draw_at(&self, canvas: &mut Canvas, position: Position);
}

/// Strokes the outer bounds of a box
fn draw_rect(canvas: &mut Canvas, rect: BoxRect, outline: Pixel) {
    if outline == 0 {
        return;
    }
    log::info!("draw rect {rect} ...");
    let (top_left, bottom_right) = rect.corners();
    canvas.stroke_rect(top_left, bottom_right, outline);
}
