//! Color representation and the 256-entry indexed palette.
//!
//! Colors on the wire are either a named token (`"default"`, `"red"`, …) or a
//! lowercase 6-hex-digit RGB string. `Color` is the in-memory equivalent;
//! `indexed_to_rgb` implements the deterministic palette used to resolve
//! `38;5;n` / `48;5;n` SGR sequences.

use std::fmt;

/// An RGB triple, serialized on the wire as six lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The sixteen ANSI/aixterm color names plus the reset sentinel `default`.
///
/// Used for both foreground and background; the meaning of e.g. `Black` is
/// "black ink" for a foreground and "black paper" for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Default,
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightBrown,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    /// ANSI foreground code `30..37` or `39` to a named color; `None` if out of range.
    pub fn from_ansi_fg(code: u16) -> Option<Self> {
        Self::from_ansi_base(code, 30)
    }

    /// ANSI background code `40..47` or `49` to a named color; `None` if out of range.
    pub fn from_ansi_bg(code: u16) -> Option<Self> {
        Self::from_ansi_base(code, 40)
    }

    fn from_ansi_base(code: u16, base: u16) -> Option<Self> {
        if code == base + 9 {
            return Some(Self::Default);
        }
        let offset = code.checked_sub(base)?;
        Self::from_offset(offset)
    }

    /// aixterm bright foreground code `90..97`.
    pub fn from_aixterm_fg(code: u16) -> Option<Self> {
        code.checked_sub(90).and_then(Self::from_bright_offset)
    }

    /// aixterm bright background code `100..107`.
    pub fn from_aixterm_bg(code: u16) -> Option<Self> {
        code.checked_sub(100).and_then(Self::from_bright_offset)
    }

    fn from_offset(offset: u16) -> Option<Self> {
        Some(match offset {
            0 => Self::Black,
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Brown,
            4 => Self::Blue,
            5 => Self::Magenta,
            6 => Self::Cyan,
            7 => Self::White,
            _ => return None,
        })
    }

    fn from_bright_offset(offset: u16) -> Option<Self> {
        Some(match offset {
            0 => Self::BrightBlack,
            1 => Self::BrightRed,
            2 => Self::BrightGreen,
            3 => Self::BrightBrown,
            4 => Self::BrightBlue,
            5 => Self::BrightMagenta,
            6 => Self::BrightCyan,
            7 => Self::BrightWhite,
            _ => return None,
        })
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Brown => "brown",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::BrightBlack => "brightblack",
            Self::BrightRed => "brightred",
            Self::BrightGreen => "brightgreen",
            Self::BrightBrown => "brightbrown",
            Self::BrightBlue => "brightblue",
            Self::BrightMagenta => "brightmagenta",
            Self::BrightCyan => "brightcyan",
            Self::BrightWhite => "brightwhite",
        };
        f.write_str(token)
    }
}

/// A resolved cell color: either a named token or a literal RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Rgb(Rgb),
}

impl Default for Color {
    fn default() -> Self {
        Self::Named(NamedColor::Default)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => name.fmt(f),
            Self::Rgb(rgb) => rgb.fmt(f),
        }
    }
}

/// Per-axis values of the 6×6×6 color cube (indices 16..=231).
const CUBE_STEPS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

/// Fixed head of the 256-color table (indices 0..=15).
const INDEXED_HEAD: [Rgb; 16] = [
    Rgb { r: 0x00, g: 0x00, b: 0x00 },
    Rgb { r: 0xcd, g: 0x00, b: 0x00 },
    Rgb { r: 0x00, g: 0xcd, b: 0x00 },
    Rgb { r: 0xcd, g: 0xcd, b: 0x00 },
    Rgb { r: 0x00, g: 0x00, b: 0xee },
    Rgb { r: 0xcd, g: 0x00, b: 0xcd },
    Rgb { r: 0x00, g: 0xcd, b: 0xcd },
    Rgb { r: 0xe5, g: 0xe5, b: 0xe5 },
    Rgb { r: 0x7f, g: 0x7f, b: 0x7f },
    Rgb { r: 0xff, g: 0x00, b: 0x00 },
    Rgb { r: 0x00, g: 0xff, b: 0x00 },
    Rgb { r: 0xff, g: 0xff, b: 0x00 },
    Rgb { r: 0x5c, g: 0x5c, b: 0xff },
    Rgb { r: 0xff, g: 0x00, b: 0xff },
    Rgb { r: 0x00, g: 0xff, b: 0xff },
    Rgb { r: 0xff, g: 0xff, b: 0xff },
];

/// Resolve an index `0..=255` in the 256-color table to an RGB triple.
///
/// `0..=15` is the fixed head table, `16..=231` is the 6×6×6 cube, and
/// `232..=255` is a 24-step grayscale ramp.
pub fn indexed_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => INDEXED_HEAD[index as usize],
        16..=231 => {
            let i = index - 16;
            let r = CUBE_STEPS[(i / 36 % 6) as usize];
            let g = CUBE_STEPS[(i / 6 % 6) as usize];
            let b = CUBE_STEPS[(i % 6) as usize];
            Rgb { r, g, b }
        }
        232..=255 => {
            let v = 8 + 10 * (index - 232);
            Rgb { r: v, g: v, b: v }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_head_matches_table() {
        assert_eq!(indexed_to_rgb(1), Rgb { r: 0xcd, g: 0x00, b: 0x00 });
        assert_eq!(indexed_to_rgb(15), Rgb { r: 0xff, g: 0xff, b: 0xff });
    }

    #[test]
    fn cube_corner_is_black() {
        assert_eq!(indexed_to_rgb(16), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn cube_far_corner_is_white() {
        assert_eq!(indexed_to_rgb(231), Rgb { r: 0xff, g: 0xff, b: 0xff });
    }

    #[test]
    fn grayscale_ramp_endpoints() {
        assert_eq!(indexed_to_rgb(232), Rgb { r: 8, g: 8, b: 8 });
        assert_eq!(indexed_to_rgb(255), Rgb { r: 238, g: 238, b: 238 });
    }

    #[test]
    fn rgb_hex_formatting_is_lowercase() {
        let rgb = Rgb { r: 0xff, g: 0x80, b: 0x00 };
        assert_eq!(rgb.to_string(), "ff8000");
    }

    #[test]
    fn named_color_tokens() {
        assert_eq!(NamedColor::Default.to_string(), "default");
        assert_eq!(NamedColor::BrightRed.to_string(), "brightred");
    }

    #[test]
    fn ansi_fg_mapping() {
        assert_eq!(NamedColor::from_ansi_fg(30), Some(NamedColor::Black));
        assert_eq!(NamedColor::from_ansi_fg(39), Some(NamedColor::Default));
        assert_eq!(NamedColor::from_ansi_fg(38), None);
    }

    #[test]
    fn aixterm_bg_mapping() {
        assert_eq!(NamedColor::from_aixterm_bg(100), Some(NamedColor::BrightBlack));
        assert_eq!(NamedColor::from_aixterm_bg(107), Some(NamedColor::BrightWhite));
    }
}
