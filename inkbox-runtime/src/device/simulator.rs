use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::EpdDevice;
use crate::layout::Pixel;

/// Resolution of the 7.5" panel
pub const DEFAULT_WIDTH: Pixel = 640;
pub const DEFAULT_HEIGHT: Pixel = 384;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PanelState {
    Off,
    Ready,
    Released,
}

/// Simulated panel: every frame it is sent is written to `output` as a binary PBM image.
pub struct PbmPanel {
    width: Pixel,
    height: Pixel,
    output: PathBuf,
    state: PanelState,
    frames: usize,
}
impl PbmPanel {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self::with_size(output, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    pub fn with_size(output: impl Into<PathBuf>, width: Pixel, height: Pixel) -> Self {
        Self {
            width,
            height,
            output: output.into(),
            state: PanelState::Off,
            frames: 0,
        }
    }

    /// Frames written so far, including clears
    pub fn frames(&self) -> usize {
        self.frames
    }

    fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    fn ensure_ready(&self) -> io::Result<()> {
        match self.state {
            PanelState::Ready => Ok(()),
            PanelState::Off => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "panel has not been initialised",
            )),
            PanelState::Released => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "panel has been released",
            )),
        }
    }

    /// PBM stores set bits as black, the panel buffer stores them as white
    fn write_frame(&mut self, buffer: &[u8]) -> io::Result<()> {
        let expected = self.stride() * self.height as usize;
        if buffer.len() != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("frame is {} bytes, panel takes {expected}", buffer.len()),
            ));
        }

        let mut out = BufWriter::new(File::create(&self.output)?);
        write!(out, "P4\n{} {}\n", self.width, self.height)?;
        let inverted: Vec<u8> = buffer.iter().map(|byte| !byte).collect();
        out.write_all(&inverted)?;
        out.flush()?;

        self.frames += 1;
        log::debug!("frame {} written to {}", self.frames, self.output.display());
        Ok(())
    }
}
impl EpdDevice for PbmPanel {
    fn width(&self) -> Pixel {
        self.width
    }

    fn height(&self) -> Pixel {
        self.height
    }

    fn init(&mut self) -> io::Result<()> {
        if self.state == PanelState::Released {
            return self.ensure_ready();
        }
        self.state = PanelState::Ready;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.ensure_ready()?;
        let blank = vec![0xff; self.stride() * self.height as usize];
        self.write_frame(&blank)
    }

    fn display(&mut self, buffer: &[u8]) -> io::Result<()> {
        self.ensure_ready()?;
        self.write_frame(buffer)
    }

    fn release(&mut self) {
        log::debug!("releasing simulated panel");
        self.state = PanelState::Released;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{Canvas, Color};
    use crate::layout::Position;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("inkbox-{}-{name}.pbm", std::process::id()))
    }

    #[test]
    fn display_before_init_fails() {
        let mut panel = PbmPanel::with_size(scratch("uninit"), 8, 2);
        let err = panel.display(&[0xff, 0xff]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
        assert_eq!(panel.frames(), 0);
    }

    #[test]
    fn writes_inverted_pbm() {
        let path = scratch("frame");
        let mut panel = PbmPanel::with_size(&path, 10, 1);
        panel.init().unwrap();

        let mut canvas = Canvas::new(10, 1);
        canvas.set(Position { x: 0, y: 0 }, Color::Black);
        let buffer = panel.get_buffer(&canvas);
        panel.display(&buffer).unwrap();

        let written = std::fs::read(&path).unwrap();
        assert_eq!(&written[..8], b"P4\n10 1\n");
        assert_eq!(&written[8..], &[0b1000_0000, 0b0011_1111]);
        assert_eq!(panel.frames(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn rejects_wrong_sized_frames() {
        let path = scratch("short");
        let mut panel = PbmPanel::with_size(&path, 16, 4);
        panel.init().unwrap();
        let err = panel.display(&[0xff; 3]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn released_panel_stays_unusable() {
        let path = scratch("released");
        let mut panel = PbmPanel::with_size(&path, 8, 1);
        panel.init().unwrap();
        panel.release();
        assert!(panel.init().is_err());
        assert!(panel.clear().is_err());
    }
}
