use std::io;

use crate::layout::{BoxRect, Pixel};

/// Everything a draw or device call can report back to its caller.
///
/// These are logged where they happen; returning them lets the caller decide
/// whether a partially painted canvas is acceptable.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("font {face:?} is unavailable: {reason}")]
    FontUnavailable { face: String, reason: String },

    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),

    /// Padding eats more than half of the box
    #[error("padding {padding} leaves no interior in box {rect}")]
    InvalidBox { rect: BoxRect, padding: Pixel },

    /// The user asked to stop and the panel has been released
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
