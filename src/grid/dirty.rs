//! Dirty line tracking.

/// Tracks which line indices have been mutated since the last drain.
#[derive(Debug, Clone)]
pub struct DirtySet {
    lines: Vec<bool>,
}

impl DirtySet {
    pub fn new(lines: usize) -> Self {
        Self { lines: vec![false; lines] }
    }

    /// Mark a single line dirty.
    pub fn mark(&mut self, line: usize) {
        if let Some(slot) = self.lines.get_mut(line) {
            *slot = true;
        }
    }

    /// Mark every line dirty.
    pub fn mark_all(&mut self) {
        self.lines.iter_mut().for_each(|slot| *slot = true);
    }

    /// Resize to a new line count, discarding prior dirty state.
    pub fn resize(&mut self, lines: usize) {
        self.lines = vec![false; lines];
    }

    /// The set of dirty line indices, in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(i, &dirty)| dirty.then_some(i))
            .collect()
    }

    /// Clear all dirty marks.
    pub fn clear(&mut self) {
        self.lines.iter_mut().for_each(|slot| *slot = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_then_indices() {
        let mut dirty = DirtySet::new(4);
        dirty.mark(1);
        dirty.mark(3);
        assert_eq!(dirty.indices(), vec![1, 3]);
    }

    #[test]
    fn mark_out_of_range_is_ignored() {
        let mut dirty = DirtySet::new(2);
        dirty.mark(5);
        assert!(dirty.indices().is_empty());
    }

    #[test]
    fn mark_all_marks_every_line() {
        let mut dirty = DirtySet::new(3);
        dirty.mark_all();
        assert_eq!(dirty.indices(), vec![0, 1, 2]);
    }

    #[test]
    fn clear_resets() {
        let mut dirty = DirtySet::new(2);
        dirty.mark_all();
        dirty.clear();
        assert!(dirty.indices().is_empty());
    }

    #[test]
    fn resize_drops_old_state() {
        let mut dirty = DirtySet::new(2);
        dirty.mark_all();
        dirty.resize(4);
        assert!(dirty.indices().is_empty());
        dirty.mark(3);
        assert_eq!(dirty.indices(), vec![3]);
    }
}
