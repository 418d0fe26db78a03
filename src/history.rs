//! Scrollback history and pagination.
//!
//! Two bounded deques — lines scrolled off the top (`top`) and lines
//! scrolled off the bottom via reverse-index (`bottom`) — plus a `position`
//! counter that is `size` while viewing the live screen and lower while
//! paged back.

use std::collections::VecDeque;

use crate::grid::Row;

/// Bounded scrollback with a live/paged-back position cursor.
#[derive(Debug, Clone)]
pub struct History {
    top: VecDeque<Row>,
    bottom: VecDeque<Row>,
    size: usize,
    ratio: f64,
    position: usize,
}

impl History {
    /// `size` is the capacity of each deque; `ratio` (0, 1] controls how
    /// many lines a single page step reveals.
    pub fn new(size: usize, ratio: f64) -> Self {
        Self {
            top: VecDeque::with_capacity(size),
            bottom: VecDeque::with_capacity(size),
            size,
            ratio: ratio.clamp(f64::MIN_POSITIVE, 1.0),
            position: size,
        }
    }

    /// A history that never retains anything (pagination disabled).
    pub fn disabled() -> Self {
        Self::new(0, 1.0)
    }

    pub fn is_enabled(&self) -> bool {
        self.size > 0
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// `true` when the view is paged back from the live screen.
    pub fn is_paged(&self) -> bool {
        self.position < self.size
    }

    /// Push a line discarded off the top of the screen (via `index`).
    pub fn push_top(&mut self, line: Row) {
        if self.size == 0 {
            return;
        }
        if self.top.len() == self.size {
            self.top.pop_front();
        }
        self.top.push_back(line);
    }

    /// Push a line discarded off the bottom of the screen (via `reverse_index`).
    pub fn push_bottom(&mut self, line: Row) {
        if self.size == 0 {
            return;
        }
        if self.bottom.len() == self.size {
            self.bottom.pop_front();
        }
        self.bottom.push_back(line);
    }

    fn page_step(&self, lines: usize) -> usize {
        ((lines as f64) * self.ratio).ceil() as usize
    }

    /// Page back towards `top`. Returns the lines to shift onto the
    /// bottom-of-screen-into-history and the lines to reveal at the top of
    /// the screen, or `None` if there is nothing to page to.
    pub fn prev_page(&mut self, lines: usize) -> Option<PageShift> {
        if self.position <= lines || self.top.is_empty() {
            return None;
        }
        let mid = self.page_step(lines).min(self.top.len());
        if mid == 0 {
            return None;
        }
        let revealed: Vec<Row> = (0..mid).filter_map(|_| self.top.pop_back()).collect();
        self.position -= mid;
        Some(PageShift { count: mid, revealed, bottom_is_top: true, history: self })
    }

    /// Page forward towards the live screen, mirroring `prev_page`.
    pub fn next_page(&mut self, lines: usize) -> Option<PageShift> {
        if self.position >= self.size || self.bottom.is_empty() {
            return None;
        }
        let mid = self.page_step(lines).min(self.bottom.len()).min(self.size - self.position);
        if mid == 0 {
            return None;
        }
        let revealed: Vec<Row> = (0..mid).filter_map(|_| self.bottom.pop_front()).collect();
        self.position += mid;
        Some(PageShift { count: mid, revealed, bottom_is_top: false, history: self })
    }

    /// Clear both deques and reset `position` to "live".
    pub fn reset(&mut self) {
        self.top.clear();
        self.bottom.clear();
        self.position = self.size;
    }
}

/// A pending page shift: `revealed` lines to insert into the screen, and
/// `count` screen lines from the opposite edge to archive into the
/// opposite deque. The caller (the screen) performs the actual grid
/// mutation and then calls [`PageShift::archive`] with the lines it
/// removed.
pub struct PageShift<'a> {
    pub count: usize,
    pub revealed: Vec<Row>,
    bottom_is_top: bool,
    history: &'a mut History,
}

impl PageShift<'_> {
    /// Archive the screen lines displaced by this page shift into the
    /// opposite deque, oldest first.
    pub fn archive(self, displaced: Vec<Row>) {
        for line in displaced {
            if self.bottom_is_top {
                self.history.push_bottom(line);
            } else {
                self.history.push_top(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn row(tag: &str) -> Row {
        let mut row = Row::new(1, &Cell::default());
        row.get_mut(0).unwrap().data = tag.to_string();
        row
    }

    #[test]
    fn disabled_history_drops_everything() {
        let mut history = History::disabled();
        history.push_top(row("a"));
        assert!(history.prev_page(4).is_none());
    }

    #[test]
    fn push_top_evicts_oldest_when_full() {
        let mut history = History::new(2, 1.0);
        history.push_top(row("a"));
        history.push_top(row("b"));
        history.push_top(row("c"));
        assert_eq!(history.top.len(), 2);
        assert_eq!(history.top.front().unwrap().get(0).unwrap().data, "b");
    }

    #[test]
    fn prev_page_then_next_page_round_trips_position() {
        let mut history = History::new(10, 0.5);
        for tag in ["a", "b", "c", "d"] {
            history.push_top(row(tag));
        }
        assert_eq!(history.position(), 10);
        let shift = history.prev_page(4).unwrap();
        assert_eq!(shift.count, 2);
        let revealed = shift.revealed.clone();
        shift.archive(vec![row("x"), row("y")]);
        assert_eq!(history.position(), 8);
        assert!(history.is_paged());

        let shift = history.next_page(4).unwrap();
        assert_eq!(shift.count, 2);
        shift.archive(revealed);
        assert_eq!(history.position(), 10);
        assert!(!history.is_paged());
    }

    #[test]
    fn reset_clears_deques_and_position() {
        let mut history = History::new(4, 1.0);
        history.push_top(row("a"));
        history.prev_page(4);
        history.reset();
        assert_eq!(history.position(), 4);
        assert!(history.prev_page(4).is_none());
    }
}
