//! Key event decoding
//!
//! Turns the raw byte stream of a terminal in raw mode into checklist key
//! events. Arrow keys arrive as `ESC [ A` / `ESC [ B`; everything the
//! checklist does not understand becomes [`Key::Ignored`].

use std::io::{self, ErrorKind, Read};

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const ENTER: u8 = b'\r';

/// Read buffer size; one read may carry several keys
const READ_CHUNK: usize = 64;

/// Key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `k` or up arrow
    Up,
    /// `j` or down arrow
    Down,
    /// Space
    Toggle,
    /// Enter
    Confirm,
    /// `q`
    Quit,
    /// Ctrl+C
    Interrupt,
    /// Anything else, including unknown escape sequences
    Ignored,
}

/// Decode the first key event at the start of `bytes`
///
/// Returns the event and the number of bytes it used. An escape
/// sequence cut short by the end of `bytes` is consumed and ignored.
/// `bytes` must not be empty.
pub fn decode(bytes: &[u8]) -> (Key, usize) {
    match bytes {
        [] => (Key::Ignored, 0),
        [ESC, b'[', b'A', ..] => (Key::Up, 3),
        [ESC, b'[', b'B', ..] => (Key::Down, 3),
        [ESC, b'[', _, ..] => (Key::Ignored, 3),
        [ESC, b'['] => (Key::Ignored, 2),
        [ESC, _, ..] => (Key::Ignored, 2),
        [ESC] => (Key::Ignored, 1),
        [byte, ..] => (decode_byte(*byte), 1),
    }
}

fn decode_byte(byte: u8) -> Key {
    match byte {
        b'k' => Key::Up,
        b'j' => Key::Down,
        b' ' => Key::Toggle,
        ENTER => Key::Confirm,
        b'q' => Key::Quit,
        CTRL_C => Key::Interrupt,
        _ => Key::Ignored,
    }
}

/// Blocking key reader over a raw input stream
#[derive(Debug)]
pub struct KeyReader<R> {
    input: R,
    buf: [u8; READ_CHUNK],
    start: usize,
    end: usize,
    /// The last read used all free space, so more bytes may be waiting
    saturated: bool,
}

impl<R: Read> KeyReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: [0; READ_CHUNK],
            start: 0,
            end: 0,
            saturated: false,
        }
    }

    /// Block until the next key event
    ///
    /// An escape sequence cut off by a full buffer is completed from the
    /// next read before decoding. A closed input stream is reported as
    /// `UnexpectedEof`.
    pub fn next_key(&mut self) -> io::Result<Key> {
        let pending = &self.buf[self.start..self.end];
        if pending.is_empty() || (self.saturated && is_partial_escape(pending)) {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
            self.fill()?;
        }

        let (key, used) = decode(&self.buf[self.start..self.end]);
        self.start += used;
        Ok(key)
    }

    /// Append one read after the pending bytes
    fn fill(&mut self) -> io::Result<()> {
        let room = READ_CHUNK - self.end;
        loop {
            match self.input.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "input stream closed",
                    ));
                }
                Ok(n) => {
                    self.end += n;
                    self.saturated = n == room;
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

fn is_partial_escape(bytes: &[u8]) -> bool {
    matches!(bytes, [ESC] | [ESC, b'['])
}
