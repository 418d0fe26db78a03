//! The screen state machine: the operation surface described in the
//! module-level contract upstream parsers drive.
//!
//! [`Screen`] owns the grid, cursor, modes, charsets, tab stops, the
//! savepoint stack and (optionally) scrollback history. Every public
//! method here is one operation an upstream parser can dispatch; none of
//! them parse bytes themselves.

use std::collections::BTreeSet;

use crate::cell::Cell;
use crate::charset::{self, Table};
use crate::event::{EventListener, VoidListener};
use crate::grapheme;
use crate::grid::cursor::{Cursor, Savepoint};
use crate::grid::{Grid, Row};
use crate::history::History;
use crate::modes::{self, ModeSet};
use crate::sgr;

/// `erase_in_line`/`erase_in_display` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseMode {
    ToEnd,
    ToStart,
    All,
}

impl EraseMode {
    fn from_param(how: i64) -> Self {
        match how {
            1 => Self::ToStart,
            2 | 3 => Self::All,
            _ => Self::ToEnd,
        }
    }
}

/// `clear_tab_stop` selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabClearMode {
    AtCursor,
    All,
}

impl TabClearMode {
    fn from_param(how: i64) -> Self {
        match how {
            3 => Self::All,
            _ => Self::AtCursor,
        }
    }
}

/// The in-memory terminal presentation engine.
pub struct Screen<L: EventListener = VoidListener> {
    grid: Grid,
    cursor: Cursor,
    margins: Option<(usize, usize)>,
    modes: ModeSet,
    tab_stops: BTreeSet<usize>,
    g0: Table,
    g1: Table,
    charset: bool,
    savepoints: Vec<Savepoint>,
    dirty: crate::grid::dirty::DirtySet,
    history: History,
    title: String,
    icon_name: String,
    saved_columns: Option<usize>,
    listener: L,
}

impl Screen<VoidListener> {
    /// A screen with no scrollback.
    pub fn new(lines: usize, columns: usize) -> Self {
        Self::with_listener(lines, columns, VoidListener)
    }

    /// A screen with `size` lines of scrollback split across `top`/`bottom`
    /// history rings, paged in steps of `ratio` of a screenful.
    pub fn with_history(lines: usize, columns: usize, size: usize, ratio: f64) -> Self {
        let mut screen = Self::new(lines, columns);
        screen.history = History::new(size, ratio);
        screen
    }
}

impl<L: EventListener> Screen<L> {
    pub fn with_listener(lines: usize, columns: usize, listener: L) -> Self {
        let blank = Cell::blank(false);
        Self {
            grid: Grid::new(lines, columns, &blank),
            cursor: Cursor::new(),
            margins: None,
            modes: ModeSet::default(),
            tab_stops: default_tab_stops(columns),
            g0: charset::lat1(),
            g1: charset::vt100(),
            charset: false,
            savepoints: Vec::new(),
            dirty: crate::grid::dirty::DirtySet::new(lines),
            history: History::disabled(),
            title: String::new(),
            icon_name: String::new(),
            saved_columns: None,
            listener,
        }
    }

    // -- accessors -------------------------------------------------------

    pub fn lines(&self) -> usize {
        self.grid.lines()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn display(&self) -> Vec<String> {
        self.grid.display()
    }

    pub fn dirty(&self) -> Vec<usize> {
        self.dirty.indices()
    }

    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn listener(&mut self) -> &mut L {
        &mut self.listener
    }

    fn is_reverse(&self) -> bool {
        self.modes.contains(modes::private(modes::DECSCNM))
    }

    fn blank_cell(&self) -> Cell {
        Cell::blank(self.is_reverse())
    }

    fn effective_margins(&self) -> (usize, usize) {
        self.margins.unwrap_or((0, self.grid.lines() - 1))
    }

    fn clamp_hbounds(&mut self) {
        let max = self.grid.columns().saturating_sub(1);
        self.cursor.x = self.cursor.x.clamp(0, max);
    }

    fn clamp_vbounds(&mut self, use_margins: bool) {
        let (top, bottom) = if use_margins && self.margins.is_some() {
            self.effective_margins()
        } else {
            (0, self.grid.lines() - 1)
        };
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    // -- history middleware -----------------------------------------------

    /// Re-anchor to the live screen before any operation that is not
    /// itself a page navigation.
    fn ensure_live(&mut self) {
        while self.history.is_paged() {
            self.page(false);
        }
    }

    fn after_page(&mut self) {
        let columns = self.grid.columns();
        let blank_cell = self.blank_cell();
        for line in 0..self.grid.lines() {
            let row = self.grid.row_mut(line);
            if row.len() != columns {
                *row = crate::grid::Row::new(columns, &blank_cell);
            }
        }
        self.cursor.hidden =
            self.history.is_paged() || !self.modes.contains(modes::private(modes::DECTCEM));
    }

    /// `prev_page` if `forward` is `false`, `next_page` otherwise.
    fn page(&mut self, forward: bool) {
        let lines = self.grid.lines();
        let shift = if forward { self.history.next_page(lines) } else { self.history.prev_page(lines) };
        let Some(mut shift) = shift else { return };
        let mid = shift.count;
        let revealed = std::mem::take(&mut shift.revealed);

        let displaced = if forward {
            // Lines 0..mid move up off the screen into history.top;
            // lines mid..lines shift up by mid; revealed lines land at the bottom.
            let displaced: Vec<Row> = (0..mid).map(|_| self.grid.remove_line(0)).collect();
            for (i, row) in revealed.into_iter().enumerate() {
                self.grid.insert_line(lines - mid + i, row);
            }
            displaced
        } else {
            // Lines lines-mid..lines move down off the screen into history.bottom;
            // remaining lines shift down by mid; revealed lines land at the top.
            let mut displaced = Vec::with_capacity(mid);
            for _ in 0..mid {
                displaced.push(self.grid.remove_line(self.grid.lines() - 1));
            }
            displaced.reverse();
            for (i, row) in revealed.into_iter().enumerate() {
                self.grid.insert_line(i, row);
            }
            displaced
        };
        shift.archive(displaced);
        self.dirty.mark_all();
        self.after_page();
    }

    pub fn prev_page(&mut self) {
        self.page(false);
    }

    pub fn next_page(&mut self) {
        self.page(true);
    }

    // -- drawing -----------------------------------------------------------

    pub fn draw(&mut self, text: &str) {
        self.ensure_live();
        let table = if self.charset { &self.g1 } else { &self.g0 };
        let translated = charset::translate(text, table);

        for cluster in grapheme::graphemes(&translated) {
            let width = grapheme::width(&cluster);
            let columns = self.grid.columns();

            if self.cursor.x == columns {
                if self.modes.contains(modes::private(modes::DECAWM)) {
                    self.dirty.mark(self.cursor.y);
                    self.carriage_return_raw();
                    self.linefeed_raw();
                } else if width > 0 {
                    self.cursor.x -= width as usize;
                }
            }

            if self.modes.contains(modes::IRM) && width > 0 {
                self.insert_characters_raw(width as usize);
            }

            match width {
                1 => {
                    let style = self.cursor.attrs.clone();
                    let (x, y) = (self.cursor.x, self.cursor.y);
                    *self.grid.cell_mut(y, x) = Cell::styled(cluster, &style);
                }
                2 => {
                    let style = self.cursor.attrs.clone();
                    let (x, y) = (self.cursor.x, self.cursor.y);
                    *self.grid.cell_mut(y, x) = Cell::styled(cluster, &style);
                    if x + 1 < columns {
                        let stub = Cell::stub(&style);
                        *self.grid.cell_mut(y, x + 1) = stub;
                    }
                }
                0 if grapheme::is_all_combining(&cluster) => {
                    let (px, py) = if self.cursor.x > 0 {
                        (self.cursor.x - 1, self.cursor.y)
                    } else if self.cursor.y > 0 {
                        (columns - 1, self.cursor.y - 1)
                    } else {
                        continue;
                    };
                    let prev = self.grid.cell_mut(py, px);
                    prev.data = grapheme::nfc(&format!("{}{}", prev.data, cluster));
                    self.dirty.mark(py);
                }
                w if w < 0 => break,
                _ => {}
            }

            if width > 0 {
                self.cursor.x = (self.cursor.x + width as usize).min(columns);
            }
        }

        self.dirty.mark(self.cursor.y);
    }

    // -- cursor motion -------------------------------------------------------

    fn carriage_return_raw(&mut self) {
        self.cursor.x = 0;
    }

    pub fn carriage_return(&mut self) {
        self.ensure_live();
        self.carriage_return_raw();
    }

    fn index_raw(&mut self) {
        let (top, bottom) = self.effective_margins();
        if self.cursor.y == bottom {
            let blank = self.blank_cell();
            let removed = self.grid.scroll_up(top, bottom, 1, &blank);
            if self.history.is_enabled() {
                if let Some(line) = removed.into_iter().next() {
                    self.history.push_top(line);
                }
            }
            self.dirty.mark_all();
        } else {
            self.cursor.y += 1;
        }
    }

    pub fn index(&mut self) {
        self.ensure_live();
        self.index_raw();
    }

    fn reverse_index_raw(&mut self) {
        let (top, bottom) = self.effective_margins();
        if self.cursor.y == top {
            let blank = self.blank_cell();
            let removed = self.grid.scroll_down(top, bottom, 1, &blank);
            if self.history.is_enabled() {
                if let Some(line) = removed.into_iter().next() {
                    self.history.push_bottom(line);
                }
            }
            self.dirty.mark_all();
        } else {
            self.cursor.y -= 1;
        }
    }

    pub fn reverse_index(&mut self) {
        self.ensure_live();
        self.reverse_index_raw();
    }

    fn linefeed_raw(&mut self) {
        self.index_raw();
        if self.modes.contains(modes::LNM) {
            self.carriage_return_raw();
        }
    }

    pub fn linefeed(&mut self) {
        self.ensure_live();
        self.linefeed_raw();
    }

    pub fn backspace(&mut self) {
        self.cursor_back(1);
    }

    pub fn tab(&mut self) {
        self.ensure_live();
        let column = self
            .tab_stops
            .iter()
            .copied()
            .find(|&stop| stop > self.cursor.x)
            .unwrap_or(self.grid.columns() - 1);
        self.cursor.x = column;
    }

    pub fn cursor_up(&mut self, n: usize) {
        self.ensure_live();
        let (top, _) = self.effective_margins();
        self.cursor.y = self.cursor.y.saturating_sub(n.max(1)).max(top);
    }

    pub fn cursor_down(&mut self, n: usize) {
        self.ensure_live();
        let (_, bottom) = self.effective_margins();
        self.cursor.y = (self.cursor.y + n.max(1)).min(bottom);
    }

    pub fn cursor_back(&mut self, n: usize) {
        self.ensure_live();
        if self.cursor.x == self.grid.columns() {
            self.cursor.x -= 1;
        }
        self.cursor.x = self.cursor.x.saturating_sub(n.max(1));
        self.clamp_hbounds();
    }

    pub fn cursor_forward(&mut self, n: usize) {
        self.ensure_live();
        self.cursor.x += n.max(1);
        self.clamp_hbounds();
    }

    /// 1-based `(line, column)`. Rejected in place if `DECOM` is set and the
    /// target line falls outside the scrolling region.
    pub fn cursor_position(&mut self, line: usize, column: usize) {
        self.ensure_live();
        let mut line = line.max(1) - 1;
        let column = column.max(1) - 1;

        if let Some((top, bottom)) = self.margins {
            if self.modes.contains(modes::private(modes::DECOM)) {
                line += top;
                if !(top..=bottom).contains(&line) {
                    return;
                }
            }
        }

        self.cursor.x = column;
        self.cursor.y = line;
        self.clamp_hbounds();
        self.clamp_vbounds(false);
    }

    pub fn cursor_to_column(&mut self, column: usize) {
        self.ensure_live();
        self.cursor.x = column.max(1) - 1;
        self.clamp_hbounds();
    }

    /// Does not clamp to the scrolling region even under `DECOM`, only to
    /// full-screen bounds; see the design notes on this asymmetry.
    pub fn cursor_to_line(&mut self, line: usize) {
        self.ensure_live();
        self.cursor.y = line.max(1) - 1;
        if self.modes.contains(modes::private(modes::DECOM)) {
            if let Some((top, _)) = self.margins {
                self.cursor.y += top;
            }
        }
        self.clamp_vbounds(false);
    }

    // -- margins and scrolling ----------------------------------------------

    pub fn set_margins(&mut self, top: Option<usize>, bottom: Option<usize>) {
        self.ensure_live();
        if (top.is_none() || top == Some(0)) && bottom.is_none() {
            self.margins = None;
            return;
        }

        let (cur_top, cur_bottom) = self.effective_margins();
        let lines = self.grid.lines();
        let new_top = top.map_or(cur_top, |t| t.saturating_sub(1).min(lines - 1));
        let new_bottom = bottom.map_or(cur_bottom, |b| b.saturating_sub(1).min(lines - 1));

        if new_bottom.saturating_sub(new_top) >= 1 {
            self.margins = Some((new_top, new_bottom));
            self.cursor_position(1, 1);
        }
    }

    pub fn insert_lines(&mut self, n: usize) {
        self.ensure_live();
        let (top, bottom) = self.effective_margins();
        if (top..=bottom).contains(&self.cursor.y) {
            let blank = self.blank_cell();
            self.grid.scroll_down(self.cursor.y, bottom, n.max(1), &blank);
            self.dirty.mark_all();
            self.carriage_return_raw();
        }
    }

    pub fn delete_lines(&mut self, n: usize) {
        self.ensure_live();
        let (top, bottom) = self.effective_margins();
        if (top..=bottom).contains(&self.cursor.y) {
            let blank = self.blank_cell();
            self.grid.scroll_up(self.cursor.y, bottom, n.max(1), &blank);
            self.dirty.mark_all();
            self.carriage_return_raw();
        }
    }

    // -- character insert/delete/erase ---------------------------------------

    fn insert_characters_raw(&mut self, n: usize) {
        let columns = self.grid.columns();
        let x = self.cursor.x;
        let y = self.cursor.y;
        let blank = self.blank_cell();
        let row = self.grid.row_mut(y);
        let cells = row.as_mut_slice();
        let n = n.min(columns - x.min(columns));
        let mut i = columns;
        while i > x {
            i -= 1;
            if i + n < columns {
                cells[i + n] = cells[i].clone();
            }
        }
        for cell in cells.iter_mut().skip(x).take(n) {
            *cell = blank.clone();
        }
        self.dirty.mark(y);
    }

    pub fn insert_characters(&mut self, n: usize) {
        self.ensure_live();
        self.insert_characters_raw(n.max(1));
    }

    pub fn delete_characters(&mut self, n: usize) {
        self.ensure_live();
        let n = n.max(1);
        let columns = self.grid.columns();
        let x = self.cursor.x;
        let y = self.cursor.y;
        let blank = self.blank_cell();
        let row = self.grid.row_mut(y);
        let cells = row.as_mut_slice();
        for i in x..columns {
            if i + n < columns {
                cells[i] = cells[i + n].clone();
            } else {
                cells[i] = blank.clone();
            }
        }
        self.dirty.mark(y);
    }

    pub fn erase_characters(&mut self, n: usize) {
        self.ensure_live();
        let n = n.max(1);
        let columns = self.grid.columns();
        let end = (self.cursor.x + n).min(columns);
        let style = self.cursor.attrs.clone();
        let y = self.cursor.y;
        let row = self.grid.row_mut(y);
        for x in self.cursor.x..end {
            if let Some(cell) = row.get_mut(x) {
                *cell = Cell::styled(" ".to_string(), &style);
            }
        }
        self.dirty.mark(y);
    }

    pub fn erase_in_line(&mut self, how: i64) {
        self.ensure_live();
        self.erase_in_line_raw(EraseMode::from_param(how));
    }

    fn erase_in_line_raw(&mut self, how: EraseMode) {
        let columns = self.grid.columns();
        let style = self.cursor.attrs.clone();
        let y = self.cursor.y;
        let range = match how {
            EraseMode::ToEnd => self.cursor.x..columns,
            EraseMode::ToStart => 0..(self.cursor.x + 1).min(columns),
            EraseMode::All => 0..columns,
        };
        let row = self.grid.row_mut(y);
        for x in range {
            if let Some(cell) = row.get_mut(x) {
                *cell = Cell::styled(" ".to_string(), &style);
            }
        }
        self.dirty.mark(y);
    }

    pub fn erase_in_display(&mut self, how: i64) {
        self.ensure_live();
        let mode = EraseMode::from_param(how);
        let lines = self.grid.lines();
        let style = self.cursor.attrs.clone();
        let range = match mode {
            EraseMode::ToEnd => (self.cursor.y + 1)..lines,
            EraseMode::ToStart => 0..self.cursor.y,
            EraseMode::All => 0..lines,
        };
        for y in range.clone() {
            let row = self.grid.row_mut(y);
            for cell in row.as_mut_slice() {
                *cell = Cell::styled(" ".to_string(), &style);
            }
            self.dirty.mark(y);
        }

        if matches!(mode, EraseMode::ToEnd | EraseMode::ToStart) {
            self.erase_in_line_raw(mode);
        }

        if how == 3 {
            self.history.reset();
        }
    }

    // -- tab stops ------------------------------------------------------------

    pub fn set_tab_stop(&mut self) {
        self.ensure_live();
        self.tab_stops.insert(self.cursor.x);
    }

    pub fn clear_tab_stop(&mut self, how: i64) {
        self.ensure_live();
        match TabClearMode::from_param(how) {
            TabClearMode::AtCursor => {
                self.tab_stops.remove(&self.cursor.x);
            }
            TabClearMode::All => self.tab_stops.clear(),
        }
    }

    // -- charsets ---------------------------------------------------------------

    pub fn define_charset(&mut self, code: char, mode: char) {
        self.ensure_live();
        let Some(table) = charset::table_for_code(code) else {
            log::trace!("ignoring unknown charset designation {code:?}");
            return;
        };
        match mode {
            '(' => self.g0 = table,
            ')' => self.g1 = table,
            _ => {}
        }
    }

    pub fn shift_in(&mut self) {
        self.ensure_live();
        self.charset = false;
    }

    pub fn shift_out(&mut self) {
        self.ensure_live();
        self.charset = true;
    }

    // -- modes --------------------------------------------------------------------

    pub fn set_mode(&mut self, codes: &[u16], private: bool) {
        self.ensure_live();
        for &code in codes {
            let stored = if private { modes::private(code) } else { code };
            if private && code == modes::DECSCNM {
                self.dirty.mark_all();
            }
            self.modes.insert(stored);

            if private && code == modes::DECCOLM {
                self.saved_columns = Some(self.grid.columns());
                self.resize(self.grid.lines(), 132);
                self.erase_in_display(2);
                self.cursor_position(1, 1);
            }
            if private && code == modes::DECOM {
                self.cursor_position(1, 1);
            }
            if private && code == modes::DECSCNM {
                self.grid.set_reverse_all(true);
                let style = sgr::resolve(&[7], &self.cursor.attrs);
                self.cursor.attrs = style;
            }
            if private && code == modes::DECTCEM {
                self.cursor.hidden = false;
            }
        }
    }

    pub fn reset_mode(&mut self, codes: &[u16], private: bool) {
        self.ensure_live();
        for &code in codes {
            let stored = if private { modes::private(code) } else { code };
            if private && code == modes::DECSCNM {
                self.dirty.mark_all();
            }
            self.modes.remove(stored);

            if private && code == modes::DECCOLM {
                if self.grid.columns() == 132 {
                    if let Some(saved) = self.saved_columns.take() {
                        self.resize(self.grid.lines(), saved);
                    }
                }
                self.erase_in_display(2);
                self.cursor_position(1, 1);
            }
            if private && code == modes::DECOM {
                self.cursor_position(1, 1);
            }
            if private && code == modes::DECSCNM {
                self.grid.set_reverse_all(false);
                let style = sgr::resolve(&[27], &self.cursor.attrs);
                self.cursor.attrs = style;
            }
            if private && code == modes::DECTCEM {
                self.cursor.hidden = true;
            }
        }
    }

    // -- SGR ------------------------------------------------------------------------

    pub fn select_graphic_rendition(&mut self, params: &[i64]) {
        self.ensure_live();
        self.cursor.attrs = sgr::resolve(params, &self.cursor.attrs);
    }

    // -- save/restore -----------------------------------------------------------------

    pub fn save_cursor(&mut self) {
        self.ensure_live();
        self.savepoints.push(Savepoint {
            cursor: self.cursor.clone(),
            g0: self.g0,
            g1: self.g1,
            charset: self.charset,
            origin: self.modes.contains(modes::private(modes::DECOM)),
            wrap: self.modes.contains(modes::private(modes::DECAWM)),
        });
    }

    pub fn restore_cursor(&mut self) {
        self.ensure_live();
        if let Some(savepoint) = self.savepoints.pop() {
            self.g0 = savepoint.g0;
            self.g1 = savepoint.g1;
            self.charset = savepoint.charset;

            if savepoint.origin {
                self.set_mode(&[modes::DECOM], true);
            }
            if savepoint.wrap {
                self.set_mode(&[modes::DECAWM], true);
            }

            self.cursor = savepoint.cursor;
            self.clamp_hbounds();
            self.clamp_vbounds(true);
        } else {
            self.reset_mode(&[modes::DECOM], true);
            self.cursor_position(1, 1);
        }
    }

    // -- reset / resize -------------------------------------------------------------

    pub fn reset(&mut self) {
        log::debug!("resetting screen to {}x{}", self.grid.columns(), self.grid.lines());
        let lines = self.grid.lines();
        let columns = self.grid.columns();
        let blank = Cell::blank(false);
        self.grid = Grid::new(lines, columns, &blank);
        self.margins = None;
        self.modes = ModeSet::default();
        self.title.clear();
        self.icon_name.clear();
        self.charset = false;
        self.g0 = charset::lat1();
        self.g1 = charset::vt100();
        self.tab_stops = default_tab_stops(columns);
        self.cursor = Cursor::new();
        self.saved_columns = None;
        self.savepoints.clear();
        self.history.reset();
        self.dirty.mark_all();
    }

    pub fn resize(&mut self, lines: usize, columns: usize) {
        if lines == self.grid.lines() && columns == self.grid.columns() {
            return;
        }
        log::trace!(
            "resizing {}x{} -> {}x{}",
            self.grid.columns(),
            self.grid.lines(),
            columns,
            lines
        );
        self.dirty.resize(lines);
        self.dirty.mark_all();

        if lines < self.grid.lines() {
            self.save_cursor();
            self.cursor_position(1, 1);
            self.delete_lines(self.grid.lines() - lines);
            self.restore_cursor();
        }

        let blank = self.blank_cell();
        if columns < self.grid.columns() {
            self.grid.resize_columns(columns, &blank);
        }

        self.grid.resize_lines(lines, &blank);
        if columns > self.grid.columns() {
            self.grid.resize_columns(columns, &blank);
        }

        self.set_margins(None, None);
    }

    // -- alignment / reporting -------------------------------------------------------

    pub fn alignment_display(&mut self) {
        self.ensure_live();
        let lines = self.grid.lines();
        for y in 0..lines {
            let row = self.grid.row_mut(y);
            for cell in row.as_mut_slice() {
                cell.data = "E".to_string();
            }
        }
        self.dirty.mark_all();
    }

    pub fn set_title(&mut self, title: String) {
        self.ensure_live();
        self.listener.set_title(title.clone());
        self.title = title;
    }

    pub fn set_icon_name(&mut self, icon_name: String) {
        self.ensure_live();
        self.listener.set_icon_name(icon_name.clone());
        self.icon_name = icon_name;
    }

    pub fn bell(&mut self) {
        self.listener.bell();
    }

    pub fn debug(&mut self, _args: &[&str]) {}

    pub fn report_device_attributes(&mut self, mode: i64, private: bool) {
        self.ensure_live();
        if mode == 0 && !private {
            let report = "\u{1b}[?6c".to_string();
            self.listener.write_process_input(report);
        }
    }

    pub fn report_device_status(&mut self, mode: i64) {
        self.ensure_live();
        match mode {
            5 => self.listener.write_process_input("\u{1b}[0n".to_string()),
            6 => {
                let x = self.cursor.effective_x(self.grid.columns()) + 1;
                let mut y = self.cursor.y + 1;
                if self.modes.contains(modes::private(modes::DECOM)) {
                    if let Some((top, _)) = self.margins {
                        y -= top;
                    }
                }
                self.listener.write_process_input(format!("\u{1b}[{y};{x}R"));
            }
            _ => {}
        }
    }
}

fn default_tab_stops(columns: usize) -> BTreeSet<usize> {
    (0..columns).step_by(8).filter(|&c| c > 0).collect()
}

#[cfg(test)]
mod tests;
