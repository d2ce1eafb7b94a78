use super::{draw_rect, Drawable};
use crate::error::Result;
use crate::graphics::text::TextBoxStyle;
use crate::graphics::typeface::{FontCache, Glyph, Typeface};
use crate::graphics::{Canvas, Color};
use crate::layout::wrap::fit_text;
use crate::layout::{BoxRect, Position};

/// Glyph coverage at or above this paints a black pixel
const COVERAGE_THRESHOLD: u8 = 128;

impl Drawable for Glyph {
    /// `position` is the pen position on the baseline
    fn draw_at(&self, canvas: &mut Canvas, position: Position) {
        if self.width == 0 {
            return;
        }
        let origin_x = position.x as i64 + self.left as i64;
        let origin_y = position.y as i64 + self.top as i64;

        for (i, coverage) in self.coverage.iter().enumerate() {
            if *coverage < COVERAGE_THRESHOLD {
                continue;
            }
            let x = (i % self.width) as i64;
            let y = (i / self.width) as i64;
            canvas.set_signed(origin_x + x, origin_y + y, Color::Black);
        }
    }
}

/// One wrapped line, bound to the typeface it is set in
struct TextLine<'a> {
    contents: &'a str,
    typeface: &'a Typeface,
}
impl Drawable for TextLine<'_> {
    /// `position` is the top-left corner of the line
    fn draw_at(&self, canvas: &mut Canvas, position: Position) {
        let baseline = position
            .y
            .saturating_add(self.typeface.ascent().max(0) as u32);
        let mut cursor = position.x;

        for character in self.contents.chars() {
            let glyph = self.typeface.rasterize(character);
            glyph.draw_at(
                canvas,
                Position {
                    x: cursor,
                    y: baseline,
                },
            );
            cursor = cursor.saturating_add(glyph.advance.max(0) as u32);
        }
    }
}

/// Draws a bordered box and fills it with left-aligned, word-wrapped text.
///
/// The text sits `line_padding` inside the border, and successive lines are
/// `font_size + line_padding` apart. Text that does not fit is dropped.
///
/// Returns how many lines were drawn. Errors are logged before being returned;
/// whatever was painted up to that point stays on the canvas.
pub fn render_text_box(
    canvas: &mut Canvas,
    fonts: &mut FontCache,
    text: &str,
    rect: BoxRect,
    style: &TextBoxStyle,
) -> Result<usize> {
    draw_rect(canvas, rect, style.outline);

    let area = rect
        .inset(style.line_padding)
        .inspect_err(|e| log::info!("{e}"))?;
    let typeface = fonts
        .get(&style.font_face, style.font_size)
        .inspect_err(|e| log::info!("{e}"))?;

    log::info!("draw text ...");
    let lines = fit_text(
        text,
        style.font_size,
        area.width,
        area.height,
        style.line_padding,
    );

    let mut y = area.y;
    for contents in &lines {
        TextLine {
            contents,
            typeface: &typeface,
        }
        .draw_at(canvas, Position { x: area.x, y });
        y += style.line_height();
    }

    Ok(lines.len())
}
