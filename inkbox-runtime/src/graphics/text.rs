use crate::layout::Pixel;

pub const DEFAULT_FONT_FACE: &str = "UbuntuMono-Regular.ttf";

/// How a text box is drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBoxStyle {
    /// Border width; `0` draws no border
    pub outline: Pixel,
    pub font_size: Pixel,
    /// Inset from the border on every side, and the extra gap between lines
    pub line_padding: Pixel,
    /// File name inside the fonts directory
    pub font_face: String,
}
impl TextBoxStyle {
    pub fn with_font_size(font_size: Pixel) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// Baseline-to-baseline distance
    pub fn line_height(&self) -> Pixel {
        self.font_size + self.line_padding
    }
}
impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            outline: 1,
            font_size: 16,
            line_padding: 2,
            font_face: DEFAULT_FONT_FACE.to_owned(),
        }
    }
}
