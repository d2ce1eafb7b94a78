/// Greedy word wrapping of plain text into a bounded box
pub mod wrap;

use std::fmt::Display;

use crate::error::RenderError;

/// Canvas coordinates and dimensions are whole pixels
pub type Pixel = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: Pixel,
    pub height: Pixel,
}

/// Position from the top left of the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: Pixel,
    pub y: Pixel,
}

/// A user-facing `(x, y, width, height)` box.
///
/// Drawing code works with inclusive corners instead;
/// [`BoxRect::corners`] does that translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxRect {
    pub x: Pixel,
    pub y: Pixel,
    pub width: Pixel,
    pub height: Pixel,
}
impl BoxRect {
    pub const fn new(x: Pixel, y: Pixel, width: Pixel, height: Pixel) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Top-left and bottom-right corners, the latter at `(x + width, y + height)`
    pub fn corners(&self) -> (Position, Position) {
        (
            self.origin(),
            Position {
                x: self.x.saturating_add(self.width),
                y: self.y.saturating_add(self.height),
            },
        )
    }

    /// Shrinks the box by `padding` on every side.
    ///
    /// A padding that would leave a negative interior is an error;
    /// an interior of exactly zero is allowed and simply draws nothing.
    pub fn inset(&self, padding: Pixel) -> Result<BoxRect, RenderError> {
        let invalid = || RenderError::InvalidBox {
            rect: *self,
            padding,
        };
        let twice = padding.checked_mul(2).ok_or_else(invalid)?;
        if twice > self.width || twice > self.height {
            return Err(invalid());
        }

        Ok(BoxRect {
            x: self.x.checked_add(padding).ok_or_else(invalid)?,
            y: self.y.checked_add(padding).ok_or_else(invalid)?,
            width: self.width - twice,
            height: self.height - twice,
        })
    }
}
impl Display for BoxRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}
