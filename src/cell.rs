//! Cell type: an immutable styled character value.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// SGR attribute flags carried on a cell and on the cursor's styling template.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const BOLD          = 1 << 0;
        const ITALICS       = 1 << 1;
        const UNDERSCORE    = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const REVERSE       = 1 << 4;
        const BLINK         = 1 << 5;
    }
}

impl Default for CellFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One character position in the terminal grid.
///
/// `data` holds the grapheme cluster drawn into this cell. An empty string
/// is the sentinel for the right half of a wide (2-cell) character: it
/// carries no glyph of its own and is skipped when rendering `display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub data: String,
    pub fg: Color,
    pub bg: Color,
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            data: " ".to_string(),
            fg: Color::default(),
            bg: Color::default(),
            flags: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// Build the cell used to fill unwritten columns: a space, `reverse` set
    /// iff screen-reverse mode (`DECSCNM`) is active.
    pub fn blank(reverse: bool) -> Self {
        let mut flags = CellFlags::empty();
        if reverse {
            flags |= CellFlags::REVERSE;
        }
        Self { data: " ".to_string(), fg: Color::default(), bg: Color::default(), flags }
    }

    /// The stub marking the right half of a wide character, styled like `style`.
    pub fn stub(style: &Cell) -> Self {
        Self { data: String::new(), fg: style.fg, bg: style.bg, flags: style.flags }
    }

    /// A new cell holding `data`, styled with `style`'s colors and flags.
    pub fn styled(data: String, style: &Cell) -> Self {
        Self { data, fg: style.fg, bg: style.bg, flags: style.flags }
    }

    /// `true` for the wide-character stub sentinel.
    pub fn is_stub(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_space() {
        let cell = Cell::default();
        assert_eq!(cell.data, " ");
        assert!(cell.flags.is_empty());
    }

    #[test]
    fn blank_with_reverse_sets_flag() {
        assert!(Cell::blank(true).flags.contains(CellFlags::REVERSE));
        assert!(!Cell::blank(false).flags.contains(CellFlags::REVERSE));
    }

    #[test]
    fn stub_is_empty_string() {
        let style = Cell { data: "a".into(), ..Cell::default() };
        let stub = Cell::stub(&style);
        assert!(stub.is_stub());
        assert_eq!(stub.fg, style.fg);
    }

    #[test]
    fn styled_copies_style_not_data() {
        let mut style = Cell::default();
        style.flags |= CellFlags::BOLD;
        let cell = Cell::styled("x".into(), &style);
        assert_eq!(cell.data, "x");
        assert!(cell.flags.contains(CellFlags::BOLD));
    }

    #[test]
    fn flags_combine() {
        let flags = CellFlags::BOLD | CellFlags::ITALICS;
        assert!(flags.contains(CellFlags::BOLD));
        assert!(flags.contains(CellFlags::ITALICS));
        assert!(!flags.contains(CellFlags::BLINK));
    }
}
