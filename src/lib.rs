//! In-memory VT-family terminal presentation engine.
//!
//! Consumes already-decoded operation calls (`draw`, `cursor_position`,
//! `select_graphic_rendition`, …) and maintains a styled character grid,
//! cursor, scroll region, modes, charsets, tab stops, a saved-state stack
//! and an optional scrollback history. Turning a raw byte stream into
//! these calls is an upstream concern; this crate only maintains "what
//! would appear on a VT-compatible display".

pub mod cell;
pub mod charset;
pub mod color;
pub mod event;
pub mod grapheme;
pub mod grid;
pub mod history;
pub mod modes;
pub mod screen;
pub mod sgr;

pub use cell::{Cell, CellFlags};
pub use color::{Color, NamedColor, Rgb};
pub use event::{EventListener, VoidListener};
pub use grid::cursor::Cursor;
pub use screen::{EraseMode, Screen, TabClearMode};
