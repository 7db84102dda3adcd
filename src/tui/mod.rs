//! Interactive terminal checklist
//!
//! Raw-mode checklist with inline differential redraw.

pub mod event;
pub mod render;
pub mod session;
pub mod state;
pub mod terminal;

pub use event::{Key, KeyReader, decode};
pub use render::{Redraw, frame_rows};
pub use session::{Outcome, Session, SessionOptions};
pub use state::{DEFAULT_HEADER, Item, SelectionState};
pub use terminal::{CrosstermTerminal, RawModeGuard, TerminalDevice};
