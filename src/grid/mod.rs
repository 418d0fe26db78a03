//! Dense grid storage: a `lines × columns` matrix of [`Cell`]s.
//!
//! Per the design note on dense implementations, there is no per-row
//! default-cell slot: every column is always physically present, and
//! screen-reverse toggles eagerly repaint every cell rather than lazily
//! changing a default.

pub mod cursor;
pub mod dirty;

use crate::cell::{Cell, CellFlags};

/// One row of the grid: exactly `columns` cells, always.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(columns: usize, blank: &Cell) -> Self {
        Self { cells: vec![blank.clone(); columns] }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(col)
    }

    fn resize(&mut self, columns: usize, blank: &Cell) {
        self.cells.resize_with(columns, || blank.clone());
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Render as a display string of exact width `self.len()`: wide-char
    /// stubs are skipped since the lead cell already carries the glyph.
    pub fn render(&self) -> String {
        self.cells.iter().filter(|cell| !cell.is_stub()).map(|cell| cell.data.as_str()).collect()
    }
}

/// A dense `lines × columns` matrix of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Row>,
    columns: usize,
}

impl Grid {
    pub fn new(lines: usize, columns: usize, blank: &Cell) -> Self {
        Self { rows: (0..lines).map(|_| Row::new(columns, blank)).collect(), columns }
    }

    pub fn lines(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, line: usize) -> &Row {
        &self.rows[line]
    }

    pub fn row_mut(&mut self, line: usize) -> &mut Row {
        &mut self.rows[line]
    }

    pub fn cell(&self, line: usize, col: usize) -> &Cell {
        &self.rows[line].cells[col]
    }

    pub fn cell_mut(&mut self, line: usize, col: usize) -> &mut Cell {
        &mut self.rows[line].cells[col]
    }

    /// Remove the top `n` lines of `[top, bottom]` and append `n` blank
    /// lines at the bottom of that range. Returns the removed lines,
    /// oldest first.
    pub fn scroll_up(&mut self, top: usize, bottom: usize, n: usize, blank: &Cell) -> Vec<Row> {
        let n = n.min(bottom - top + 1);
        let removed: Vec<Row> = self.rows.drain(top..top + n).collect();
        let insert_at = bottom + 1 - n;
        for i in 0..n {
            self.rows.insert(insert_at + i, Row::new(self.columns, blank));
        }
        removed
    }

    /// Remove the bottom `n` lines of `[top, bottom]` and insert `n` blank
    /// lines at the top of that range. Returns the removed lines, oldest
    /// (topmost) first.
    pub fn scroll_down(&mut self, top: usize, bottom: usize, n: usize, blank: &Cell) -> Vec<Row> {
        let n = n.min(bottom - top + 1);
        let start = bottom + 1 - n;
        let removed: Vec<Row> = self.rows.drain(start..=bottom).collect();
        for i in 0..n {
            self.rows.insert(top + i, Row::new(self.columns, blank));
        }
        removed
    }

    /// Widen or narrow every row, padding with `blank` or truncating.
    pub fn resize_columns(&mut self, columns: usize, blank: &Cell) {
        self.columns = columns;
        for row in &mut self.rows {
            row.resize(columns, blank);
        }
    }

    /// Grow or shrink the number of lines. Growth appends blank lines at
    /// the bottom; shrinkage drops from the bottom (callers that need
    /// "drop from the top" perform an explicit scroll first).
    pub fn resize_lines(&mut self, lines: usize, blank: &Cell) {
        self.rows.resize_with(lines, || Row::new(self.columns, blank));
    }

    pub fn insert_line(&mut self, index: usize, row: Row) {
        self.rows.insert(index, row);
    }

    pub fn remove_line(&mut self, index: usize) -> Row {
        self.rows.remove(index)
    }

    /// Set every cell's `reverse` flag to `value` (screen-reverse toggle).
    pub fn set_reverse_all(&mut self, value: bool) {
        for row in &mut self.rows {
            for cell in row.as_mut_slice() {
                cell.flags.set(CellFlags::REVERSE, value);
            }
        }
    }

    pub fn fill_all(&mut self, blank: &Cell) {
        for row in &mut self.rows {
            for cell in row.as_mut_slice() {
                *cell = blank.clone();
            }
        }
    }

    pub fn display(&self) -> Vec<String> {
        self.rows.iter().map(Row::render).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Cell {
        Cell::blank(false)
    }

    #[test]
    fn new_grid_has_exact_dimensions() {
        let grid = Grid::new(3, 5, &blank());
        assert_eq!(grid.lines(), 3);
        assert_eq!(grid.columns(), 5);
        assert_eq!(grid.row(0).len(), 5);
    }

    #[test]
    fn scroll_up_discards_top_and_blanks_bottom() {
        let mut grid = Grid::new(3, 2, &blank());
        grid.cell_mut(0, 0).data = "A".into();
        grid.cell_mut(1, 0).data = "B".into();
        grid.cell_mut(2, 0).data = "C".into();
        let removed = grid.scroll_up(0, 2, 1, &blank());
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].get(0).unwrap().data, "A");
        assert_eq!(grid.cell(0, 0).data, "B");
        assert_eq!(grid.cell(1, 0).data, "C");
        assert_eq!(grid.cell(2, 0).data, " ");
    }

    #[test]
    fn scroll_down_discards_bottom_and_blanks_top() {
        let mut grid = Grid::new(3, 2, &blank());
        grid.cell_mut(0, 0).data = "A".into();
        grid.cell_mut(1, 0).data = "B".into();
        grid.cell_mut(2, 0).data = "C".into();
        let removed = grid.scroll_down(0, 2, 1, &blank());
        assert_eq!(removed[0].get(0).unwrap().data, "C");
        assert_eq!(grid.cell(0, 0).data, " ");
        assert_eq!(grid.cell(1, 0).data, "A");
        assert_eq!(grid.cell(2, 0).data, "B");
    }

    #[test]
    fn scroll_respects_margin_bounds() {
        let mut grid = Grid::new(4, 2, &blank());
        for i in 0..4 {
            grid.cell_mut(i, 0).data = i.to_string();
        }
        grid.scroll_up(1, 2, 1, &blank());
        assert_eq!(grid.cell(0, 0).data, "0");
        assert_eq!(grid.cell(1, 0).data, "2");
        assert_eq!(grid.cell(3, 0).data, "3");
    }

    #[test]
    fn resize_columns_pads_and_truncates() {
        let mut grid = Grid::new(1, 2, &blank());
        grid.resize_columns(4, &blank());
        assert_eq!(grid.row(0).len(), 4);
        grid.resize_columns(1, &blank());
        assert_eq!(grid.row(0).len(), 1);
    }

    #[test]
    fn set_reverse_all_flips_every_cell() {
        let mut grid = Grid::new(2, 2, &blank());
        grid.set_reverse_all(true);
        for line in 0..2 {
            for col in 0..2 {
                assert!(grid.cell(line, col).flags.contains(CellFlags::REVERSE));
            }
        }
    }

    #[test]
    fn display_skips_stub_cells() {
        let mut grid = Grid::new(1, 3, &blank());
        grid.cell_mut(0, 0).data = "あ".into();
        grid.cell_mut(0, 1).data = String::new();
        assert_eq!(grid.display(), vec!["あ ".to_string()]);
    }
}
