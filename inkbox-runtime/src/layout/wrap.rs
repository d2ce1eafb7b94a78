use unicode_segmentation::UnicodeSegmentation;

use super::Pixel;

/// Every character is modelled as half the font size wide;
/// no glyph metrics are measured while wrapping.
///
/// Expressed as a ratio so the division stays in integers.
const CHAR_WIDTH_NUM: Pixel = 1;
const CHAR_WIDTH_DEN: Pixel = 2;

/// The character budget of the box, given the fixed-width approximation above
pub fn max_chars_per_line(font_size: Pixel, width: Pixel) -> usize {
    if font_size == 0 {
        return 0;
    }
    ((width as u64 * CHAR_WIDTH_DEN as u64) / (font_size as u64 * CHAR_WIDTH_NUM as u64)) as usize
}

/// How many lines of `font_size + line_padding` fit in `height`
pub fn max_lines(font_size: Pixel, height: Pixel, line_padding: Pixel) -> usize {
    let line_height = font_size as u64 + line_padding as u64;
    if line_height == 0 {
        return 0;
    }
    (height as u64 / line_height) as usize
}

/// Length of a token as the wrapper counts it
fn char_len(token: &str) -> usize {
    token.graphemes(true).count()
}

/// A line being accumulated by [`fit_text`]
struct OpenLine<'a> {
    tokens: Vec<&'a str>,
    /// Accumulated token lengths, plus one trailing space per token
    length: usize,
}
impl<'a> OpenLine<'a> {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            length: 0,
        }
    }

    fn push(&mut self, token: &'a str, token_len: usize) {
        self.tokens.push(token);
        self.length += token_len + 1;
    }

    fn close(self) -> String {
        self.tokens.join(" ")
    }
}

/// Left-aligns and fits `text` into a `width` × `height` box.
///
/// The text is split on single spaces and greedily packed into lines.
/// Tokens are never broken, so a token longer than the line budget overflows its own line.
/// Once the box is out of lines, the rest of the text is dropped.
pub fn fit_text(
    text: &str,
    font_size: Pixel,
    width: Pixel,
    height: Pixel,
    line_padding: Pixel,
) -> Vec<String> {
    let max_len = max_chars_per_line(font_size, width);
    let max_count = max_lines(font_size, height, line_padding);

    let mut lines = Vec::new();
    if text.is_empty() || max_count == 0 {
        return lines;
    }

    let mut current = OpenLine::new();
    for token in text.split(' ') {
        let token_len = char_len(token);

        if current.tokens.is_empty() || current.length + token_len <= max_len {
            current.push(token, token_len);
            continue;
        }

        lines.push(std::mem::replace(&mut current, OpenLine::new()).close());
        if lines.len() >= max_count {
            log::debug!("text truncated after {} lines", lines.len());
            return lines;
        }
        current.push(token, token_len);
    }

    if !current.tokens.is_empty() {
        lines.push(current.close());
    }
    lines
}
