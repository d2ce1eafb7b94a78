/// A panel stand-in that writes frames to disk
pub mod simulator;

use std::io;

use crate::graphics::Canvas;
use crate::layout::Pixel;

pub use simulator::PbmPanel;

/// Operations an e-paper panel driver exposes.
///
/// Every call blocks until the panel is done with it.
pub trait EpdDevice {
    fn width(&self) -> Pixel;

    fn height(&self) -> Pixel;

    /// Powers up the panel and prepares it for frames
    fn init(&mut self) -> io::Result<()>;

    /// Blanks the physical display
    fn clear(&mut self) -> io::Result<()>;

    /// Sends a frame already in the panel's native format
    fn display(&mut self, buffer: &[u8]) -> io::Result<()>;

    /// Converts a canvas to the panel's native format
    fn get_buffer(&self, canvas: &Canvas) -> Vec<u8> {
        canvas.to_panel_buffer()
    }

    /// Releases pins, buses, and power; the panel is unusable afterwards
    fn release(&mut self);
}
