use super::*;
use crate::cell::CellFlags;
use crate::color::Color;
use crate::modes;

fn screen(columns: usize, lines: usize) -> Screen {
    Screen::new(lines, columns)
}

#[test]
fn basic_draw() {
    let mut s = screen(5, 2);
    s.draw("hi");
    assert_eq!(s.display(), vec!["hi   ", "     "]);
    assert_eq!((s.cursor().x, s.cursor().y), (2, 0));
    assert!(s.dirty().contains(&0));
}

#[test]
fn auto_wrap() {
    let mut s = screen(3, 2);
    s.draw("abcd");
    assert_eq!(s.display(), vec!["abc", "d  "]);
    assert_eq!((s.cursor().x, s.cursor().y), (1, 1));
}

#[test]
fn wide_char_at_line_end_without_wrap() {
    let mut s = screen(3, 1);
    s.reset_mode(&[modes::DECAWM], true);
    s.draw("a\u{3042}");
    // Per the general write algorithm (the §3 invariant that a wide
    // character at column c < columns-1 is followed by a stub), this
    // fits exactly: lead at column 1, stub at column 2.
    assert_eq!(s.display(), vec!["a\u{3042}"]);
    assert_eq!((s.cursor().x, s.cursor().y), (3, 0));
}

#[test]
fn combining_mark_joins_previous_cell() {
    let mut s = screen(3, 1);
    s.draw("e");
    s.draw("\u{0301}");
    assert_eq!(s.display()[0].chars().next().unwrap().to_string(), "\u{e9}");
    assert_eq!((s.cursor().x, s.cursor().y), (1, 0));
}

#[test]
fn sgr_truecolor() {
    let mut s = screen(3, 1);
    s.select_graphic_rendition(&[38, 2, 255, 128, 0]);
    s.draw("x");
    assert_eq!(s.cursor().attrs.fg, Color::Rgb(crate::color::Rgb { r: 255, g: 128, b: 0 }));
}

#[test]
fn scroll_with_margins() {
    let mut s = screen(4, 4);
    s.set_margins(Some(2), Some(3));
    s.cursor_position(3, 1);
    s.clear_dirty();
    s.index();
    let mut dirty = s.dirty();
    dirty.sort_unstable();
    assert_eq!(dirty, vec![0, 1, 2, 3]);
}

#[test]
fn origin_mode_reject() {
    let mut s = screen(10, 10);
    s.set_margins(Some(3), Some(7));
    s.set_mode(&[modes::DECOM], true);
    let before = (s.cursor().x, s.cursor().y);
    s.cursor_position(10, 1);
    assert_eq!((s.cursor().x, s.cursor().y), before);
}

#[test]
fn save_restore_with_empty_stack() {
    let mut s = screen(10, 10);
    s.cursor_position(5, 5);
    s.restore_cursor();
    assert_eq!((s.cursor().x, s.cursor().y), (0, 0));
    assert!(!s.modes.contains(modes::private(modes::DECOM)));
}

#[test]
fn history_pagination_round_trip() {
    let mut s = Screen::with_history(2, 4, 10, 0.5);
    for ch in ["A", "B", "C", "D"] {
        s.draw(ch);
        s.carriage_return();
        s.linefeed();
    }
    let before = s.display();
    s.prev_page();
    s.next_page();
    assert_eq!(s.display(), before);
}

#[test]
fn save_then_restore_returns_to_prior_state() {
    let mut s = screen(10, 10);
    s.cursor_position(3, 4);
    s.select_graphic_rendition(&[1]);
    let cursor_before = s.cursor().clone();
    s.save_cursor();
    s.cursor_position(8, 8);
    s.restore_cursor();
    assert_eq!(s.cursor().x, cursor_before.x);
    assert_eq!(s.cursor().y, cursor_before.y);
}

#[test]
fn ascii_round_trip_pads_with_spaces() {
    let mut s = screen(6, 1);
    s.draw("hey");
    assert_eq!(s.display()[0], "hey   ");
}

#[test]
fn insert_replace_mode_shifts_existing_text() {
    let mut s = screen(5, 1);
    s.draw("abc");
    s.cursor_position(1, 1);
    s.set_mode(&[modes::IRM], false);
    s.draw("X");
    assert_eq!(s.display()[0], "Xabc ");
}

#[test]
fn decscnm_eagerly_repaints_existing_cells() {
    let mut s = screen(3, 1);
    s.draw("a");
    s.set_mode(&[modes::DECSCNM], true);
    assert!(s.grid.cell(0, 0).flags.contains(CellFlags::REVERSE));
}

#[test]
fn cursor_to_line_ignores_scrolling_region_under_origin_mode() {
    let mut s = screen(10, 10);
    s.set_margins(Some(3), Some(7));
    s.set_mode(&[modes::DECOM], true);
    s.cursor_to_line(10);
    assert_eq!(s.cursor().y, 9);
}

#[test]
fn set_margins_zero_top_clears_to_full_screen() {
    let mut s = screen(10, 10);
    s.set_margins(Some(3), Some(7));
    s.set_margins(Some(0), None);
    s.set_mode(&[modes::DECOM], true);
    s.cursor_position(10, 1);
    assert_eq!(s.cursor().y, 9);
}

#[test]
fn clear_tab_stop_by_param() {
    let mut s = screen(40, 1);
    s.cursor_to_column(9);
    s.set_tab_stop();
    s.clear_tab_stop(0);
    s.cursor_to_column(1);
    s.tab();
    assert_eq!(s.cursor().x, 16);

    s.clear_tab_stop(3);
    s.cursor_to_column(1);
    s.tab();
    assert_eq!(s.cursor().x, 39);
}
