//! Interactive checklist session
//!
//! Owns the terminal for the duration of one checklist: enters raw mode,
//! draws the first frame, then reads key events until the user confirms
//! or cancels. The terminal is restored before `run` returns, including
//! when input fails.

use crate::error::{Error, Result};
use crate::tui::event::{Key, KeyReader};
use crate::tui::render::Redraw;
use crate::tui::state::SelectionState;
use crate::tui::terminal::{RawModeGuard, TerminalDevice};
use std::io::{Read, Write};
use tracing::{debug, info};

/// Session behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Draw on the alternate screen buffer
    pub alternate_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Enter pressed; the selected labels in list order
    Confirmed(Vec<String>),
    /// `q` or Ctrl+C pressed
    Cancelled,
}

impl Outcome {
    /// Selected labels, empty when cancelled
    pub fn into_labels(self) -> Vec<String> {
        match self {
            Outcome::Confirmed(labels) => labels,
            Outcome::Cancelled => Vec::new(),
        }
    }
}

/// One interactive run of the checklist
#[derive(Debug)]
pub struct Session<T, R, W> {
    state: SelectionState,
    device: T,
    keys: KeyReader<R>,
    output: W,
    options: SessionOptions,
}

impl<T, R, W> Session<T, R, W>
where
    T: TerminalDevice,
    R: Read,
    W: Write,
{
    pub fn new(state: SelectionState, device: T, input: R, output: W) -> Self {
        Self {
            state,
            device,
            keys: KeyReader::new(input),
            output,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the checklist; returns the selected labels (empty on cancel)
    pub fn run(self) -> Result<Vec<String>> {
        self.run_outcome().map(Outcome::into_labels)
    }

    /// Run the checklist and report whether it was confirmed or cancelled
    pub fn run_outcome(self) -> Result<Outcome> {
        let Session {
            mut state,
            device,
            mut keys,
            mut output,
            options,
        } = self;

        info!(
            items = state.items().len(),
            alternate_screen = options.alternate_screen,
            "Starting checklist session"
        );

        let guard = RawModeGuard::acquire(device, options.alternate_screen)?;
        let outcome = event_loop(&mut state, &guard, &mut keys, &mut output);
        drop(guard);

        match &outcome {
            Ok(Outcome::Confirmed(labels)) => info!(selected = labels.len(), "Checklist confirmed"),
            Ok(Outcome::Cancelled) => info!("Checklist cancelled"),
            Err(e) => debug!(error = %e, "Checklist aborted"),
        }
        outcome
    }
}

fn event_loop<T, R, W>(
    state: &mut SelectionState,
    terminal: &RawModeGuard<T>,
    keys: &mut KeyReader<R>,
    output: &mut W,
) -> Result<Outcome>
where
    T: TerminalDevice,
    R: Read,
    W: Write,
{
    let mut redraw = Redraw::new();
    redraw.draw(output, &state.render_lines(), terminal.width())?;

    loop {
        let key = keys.next_key().map_err(Error::Input)?;
        debug!(?key, cursor = state.cursor(), "Key event");

        let changed = match key {
            Key::Up => state.move_cursor_up(),
            Key::Down => state.move_cursor_down(),
            Key::Toggle => {
                state.toggle_selection();
                true
            }
            Key::Confirm => return Ok(Outcome::Confirmed(state.selected_labels())),
            Key::Quit | Key::Interrupt => return Ok(Outcome::Cancelled),
            Key::Ignored => false,
        };

        if changed {
            redraw.draw(output, &state.render_lines(), terminal.width())?;
        }
    }
}
