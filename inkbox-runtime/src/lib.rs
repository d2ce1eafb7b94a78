//! Lays out image boxes and word-wrapped text boxes on a 1-bit canvas
//! and hands the result to an e-paper panel.

/// Explicit runtime settings and logger setup
pub mod config;

/// E-paper panel drivers
pub mod device;

pub mod error;

/// Graphics primitives: the canvas, typefaces, and bitmaps
pub mod graphics;

/// Box geometry and text fitting
pub mod layout;

/// Image box and text box renderers
pub mod render;

/// Panel bring-up and frame hand-off
pub mod session;

pub use error::{RenderError, Result};
