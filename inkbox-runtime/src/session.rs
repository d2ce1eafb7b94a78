use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::device::EpdDevice;
use crate::error::{RenderError, Result};
use crate::graphics::Canvas;

/// Time the panel needs to finish a refresh before it may be commanded again
pub const DEFAULT_SETTLE: Duration = Duration::from_secs(2);

/// Set once the user asks to stop (ctrl + c)
#[derive(Clone, Debug, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}
impl Interrupt {
    /// Hooks SIGINT up to a fresh flag
    pub fn register() -> std::io::Result<Self> {
        let interrupt = Self::default();
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupt.raised))?;
        Ok(interrupt)
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

/// Runs once the panel has been released after an interrupt
pub type ExitHook = Box<dyn Fn()>;

/// Owns the pacing of one render pass: bring the panel up, hand out a canvas,
/// and push the finished canvas back to the panel.
pub struct Session {
    settle: Duration,
    interrupt: Interrupt,
    exit: ExitHook,
}
impl Session {
    /// An interrupt ends the process with status 0
    pub fn new(settle: Duration, interrupt: Interrupt) -> Self {
        Self::with_exit_hook(settle, interrupt, Box::new(|| std::process::exit(0)))
    }

    pub fn with_exit_hook(settle: Duration, interrupt: Interrupt, exit: ExitHook) -> Self {
        Self {
            settle,
            interrupt,
            exit,
        }
    }

    /// Acts on a pending interrupt: releases the panel and ends the process on the spot,
    /// abandoning the half-drawn canvas.
    ///
    /// Call between draw steps so a ctrl + c never waits for the next frame.
    /// Only returns [`RenderError::Interrupted`] when the exit hook itself returns.
    pub fn check(&self, device: &mut dyn EpdDevice) -> Result<()> {
        if !self.interrupt.is_raised() {
            return Ok(());
        }
        log::info!("ctrl + c:");
        device.release();
        (self.exit)();
        Err(RenderError::Interrupted)
    }

    /// Initialises the panel, optionally blanks it, and returns an all-white canvas
    /// the size of the panel.
    pub fn init(&self, device: &mut dyn EpdDevice, clear: bool) -> Result<Canvas> {
        self.check(device)?;
        log::info!("init the canvas ...");
        let init = device.init();
        self.check(device)?;
        init.inspect_err(|e| log::info!("{e}"))?;

        if clear {
            log::info!("clear the canvas ...");
            let cleared = device.clear();
            self.check(device)?;
            cleared.inspect_err(|e| log::info!("{e}"))?;
        }

        Ok(Canvas::new(device.width(), device.height()))
    }

    /// Sends `canvas` to the panel, then waits out the refresh.
    ///
    /// A pending interrupt stops the frame from being sent at all.
    /// The wait itself is not cut short; an interrupt during it is acted on once it ends.
    pub fn display(&self, device: &mut dyn EpdDevice, canvas: &Canvas) -> Result<()> {
        self.check(device)?;
        log::debug!(
            "sending frame, {} black pixels",
            canvas.count(crate::graphics::Color::Black)
        );
        let buffer = device.get_buffer(canvas);
        let shown = device.display(&buffer);
        self.check(device)?;
        shown.inspect_err(|e| log::info!("{e}"))?;

        std::thread::sleep(self.settle);
        self.check(device)
    }
}
