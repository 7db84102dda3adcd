//! Differential redraw
//!
//! Each frame replaces the previous one in place: move the cursor back up
//! over the rows the last frame occupied, clear to the end of the screen,
//! write the new lines. The row count is recomputed from the written text
//! and the terminal width every frame, so wrapped lines are erased too.

use crossterm::{
    cursor::MoveUp,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tracing::trace;

/// Number of terminal rows `lines` occupy at `width` columns
///
/// Lines are measured in characters, not display columns, so glyphs
/// wider than one column (CJK, emoji) are under-counted. An empty line
/// still takes one row.
pub fn frame_rows(lines: &[String], width: usize) -> usize {
    let width = width.max(1);
    lines
        .iter()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum()
}

/// Redraw bookkeeping for one output stream
#[derive(Debug, Default)]
pub struct Redraw {
    /// Rows drawn by the previous frame; `None` before the first frame
    last_rows: Option<usize>,
}

impl Redraw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows occupied by the last frame written
    #[cfg(test)]
    fn last_rows(&self) -> Option<usize> {
        self.last_rows
    }

    /// Erase the previous frame and write `lines` in its place
    pub fn draw<W: Write>(&mut self, out: &mut W, lines: &[String], width: usize) -> io::Result<()> {
        if let Some(rows) = self.last_rows.filter(|rows| *rows > 0) {
            queue!(out, MoveUp(u16::try_from(rows).unwrap_or(u16::MAX)))?;
        }
        queue!(out, Clear(ClearType::FromCursorDown))?;

        for line in lines {
            queue!(out, Print(line), Print("\r\n"))?;
        }
        out.flush()?;

        let rows = frame_rows(lines, width);
        trace!(lines = lines.len(), rows, width, "Frame drawn");
        self.last_rows = Some(rows);
        Ok(())
    }
}
