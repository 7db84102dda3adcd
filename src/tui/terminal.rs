//! Terminal mode handling
//!
//! Raw mode and the alternate screen are acquired through [`RawModeGuard`],
//! which restores the terminal when dropped, on every exit path.

use crate::error::{Error, Result};
use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use tracing::{debug, warn};

/// Mode switching and size queries for the terminal the checklist runs in
pub trait TerminalDevice {
    /// Switch to raw mode, optionally on the alternate screen
    fn enter(&mut self, alternate_screen: bool) -> io::Result<()>;

    /// Undo [`TerminalDevice::enter`]
    fn leave(&mut self) -> io::Result<()>;

    /// Current width in columns
    fn width(&self) -> usize;
}

/// The process's controlling terminal, via crossterm
#[derive(Debug)]
pub struct CrosstermTerminal {
    fallback_width: u16,
    on_alternate_screen: bool,
}

impl CrosstermTerminal {
    /// `fallback_width` is reported when the size query fails or returns 0
    pub fn new(fallback_width: u16) -> Self {
        Self {
            fallback_width,
            on_alternate_screen: false,
        }
    }
}

impl TerminalDevice for CrosstermTerminal {
    fn enter(&mut self, alternate_screen: bool) -> io::Result<()> {
        terminal::enable_raw_mode()?;

        if alternate_screen {
            if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
                let _ = terminal::disable_raw_mode();
                return Err(e);
            }
            self.on_alternate_screen = true;
        }
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        // Always attempt both steps; report the first failure
        let screen = if self.on_alternate_screen {
            self.on_alternate_screen = false;
            execute!(io::stdout(), LeaveAlternateScreen)
        } else {
            Ok(())
        };
        let raw = terminal::disable_raw_mode();
        screen.and(raw)
    }

    fn width(&self) -> usize {
        match terminal::size() {
            Ok((width, _)) if width > 0 => width as usize,
            _ => self.fallback_width.max(1) as usize,
        }
    }
}

/// Holds a terminal in raw mode for as long as the guard lives
#[derive(Debug)]
pub struct RawModeGuard<T: TerminalDevice> {
    device: T,
}

impl<T: TerminalDevice> RawModeGuard<T> {
    /// Enter raw mode, failing without touching the screen if it is refused
    pub fn acquire(mut device: T, alternate_screen: bool) -> Result<Self> {
        device.enter(alternate_screen).map_err(Error::RawMode)?;
        debug!(alternate_screen, "Entered raw mode");
        Ok(Self { device })
    }

    pub fn width(&self) -> usize {
        self.device.width()
    }
}

impl<T: TerminalDevice> Drop for RawModeGuard<T> {
    fn drop(&mut self) {
        match self.device.leave() {
            Ok(()) => debug!("Restored terminal mode"),
            Err(e) => warn!(error = %e, "Failed to restore terminal mode"),
        }
    }
}
