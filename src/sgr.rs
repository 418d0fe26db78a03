//! Select Graphic Rendition (SGR) parameter resolution.

use crate::cell::{Cell, CellFlags};
use crate::color::{Color, NamedColor, Rgb, indexed_to_rgb};

/// Resolve a sequence of SGR parameters against a starting cell style,
/// returning the updated style.
///
/// Parameters are consumed left to right with a small look-ahead for the
/// `38`/`48` extended color forms; a sequence truncated mid-extended-color
/// leaves the prior color untouched rather than erroring.
pub fn resolve(params: &[i64], base: &Cell) -> Cell {
    let mut style = base.clone();
    let mut params = params.iter().copied();

    if params.len() == 0 {
        return Cell { data: style.data, ..Cell::default() };
    }

    while let Some(code) = params.next() {
        match code {
            0 => style = Cell { data: style.data.clone(), ..Cell::default() },
            1 => style.flags |= CellFlags::BOLD,
            3 => style.flags |= CellFlags::ITALICS,
            4 => style.flags |= CellFlags::UNDERSCORE,
            5 => style.flags |= CellFlags::BLINK,
            7 => style.flags |= CellFlags::REVERSE,
            9 => style.flags |= CellFlags::STRIKETHROUGH,
            22 => style.flags.remove(CellFlags::BOLD),
            23 => style.flags.remove(CellFlags::ITALICS),
            24 => style.flags.remove(CellFlags::UNDERSCORE),
            25 => style.flags.remove(CellFlags::BLINK),
            27 => style.flags.remove(CellFlags::REVERSE),
            29 => style.flags.remove(CellFlags::STRIKETHROUGH),
            38 => {
                if let Some(color) = resolve_extended(&mut params) {
                    style.fg = color;
                }
            }
            48 => {
                if let Some(color) = resolve_extended(&mut params) {
                    style.bg = color;
                }
            }
            code if (30..=37).contains(&code) || code == 39 => {
                if let Some(name) = NamedColor::from_ansi_fg(code as u16) {
                    style.fg = Color::Named(name);
                }
            }
            code if (40..=47).contains(&code) || code == 49 => {
                if let Some(name) = NamedColor::from_ansi_bg(code as u16) {
                    style.bg = Color::Named(name);
                }
            }
            code if (90..=97).contains(&code) => {
                if let Some(name) = NamedColor::from_aixterm_fg(code as u16) {
                    style.fg = Color::Named(name);
                }
            }
            code if (100..=107).contains(&code) => {
                if let Some(name) = NamedColor::from_aixterm_bg(code as u16) {
                    style.bg = Color::Named(name);
                }
            }
            _ => log::trace!("ignoring unknown SGR parameter {code}"),
        }
    }

    style
}

/// Consume the `5;n` or `2;r;g;b` tail of an extended `38`/`48` sequence.
///
/// Returns `None` (leaving the previous color untouched) if the sequence
/// is truncated or the mode selector is unrecognized.
fn resolve_extended(params: &mut impl Iterator<Item = i64>) -> Option<Color> {
    match params.next()? {
        5 => {
            let index = params.next()?;
            let index = u8::try_from(index).ok()?;
            Some(Color::Rgb(indexed_to_rgb(index)))
        }
        2 => {
            let r = u8::try_from(params.next()?).ok()?;
            let g = u8::try_from(params.next()?).ok()?;
            let b = u8::try_from(params.next()?).ok()?;
            Some(Color::Rgb(Rgb { r, g, b }))
        }
        _ => None,
    }
}
