use std::collections::BTreeSet;

use super::item::StoreChange;

/// Checked state for list positions.
///
/// Positions at or past `len` are never checked; out-of-range requests are
/// ignored rather than reported.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    checked: BTreeSet<usize>,
    len: usize,
}

impl SelectionTracker {
    pub fn new(len: usize) -> Self {
        SelectionTracker {
            checked: BTreeSet::new(),
            len,
        }
    }

    /// Set the checked state of `position` and return the new checked count.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> usize {
        if position < self.len {
            if checked {
                self.checked.insert(position);
            } else {
                self.checked.remove(&position);
            }
        }
        self.checked.len()
    }

    /// Check every position in range.
    pub fn check_all(&mut self) -> usize {
        self.checked.extend(0..self.len);
        self.checked.len()
    }

    pub fn clear_all(&mut self) {
        self.checked.clear();
    }

    pub fn is_checked(&self, position: usize) -> bool {
        self.checked.contains(&position)
    }

    pub fn count(&self) -> usize {
        self.checked.len()
    }

    /// Ascending snapshot of the checked positions.
    pub fn checked_positions(&self) -> Vec<usize> {
        self.checked.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// An item was inserted at `position`: later checks move down one row.
    pub fn on_inserted(&mut self, position: usize) {
        self.len += 1;
        self.checked = self
            .checked
            .iter()
            .map(|&p| if p >= position { p + 1 } else { p })
            .collect();
    }

    /// The item at `position` was removed: its check goes with it and later
    /// checks move up one row.
    pub fn on_removed(&mut self, position: usize) {
        if position >= self.len {
            return;
        }
        self.len -= 1;
        self.checked = self
            .checked
            .iter()
            .filter(|&&p| p != position)
            .map(|&p| if p > position { p - 1 } else { p })
            .collect();
    }

    /// Follow a store mutation so checked positions keep pointing at the
    /// same items.
    pub fn apply(&mut self, change: &StoreChange) {
        match change {
            StoreChange::Appended { .. } => self.len += 1,
            StoreChange::Inserted { position, .. } => self.on_inserted(*position),
            StoreChange::Removed { position, .. } => self.on_removed(*position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_checked_returns_count() {
        let mut sel = SelectionTracker::new(10);
        assert_eq!(sel.set_checked(3, true), 1);
        assert_eq!(sel.set_checked(7, true), 2);
        assert_eq!(sel.set_checked(3, false), 1);
    }

    #[test]
    fn set_checked_is_idempotent() {
        let mut sel = SelectionTracker::new(10);
        sel.set_checked(4, true);
        assert_eq!(sel.set_checked(4, true), 1);
        sel.set_checked(4, false);
        assert_eq!(sel.set_checked(4, false), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut sel = SelectionTracker::new(3);
        assert_eq!(sel.set_checked(3, true), 0);
        assert_eq!(sel.set_checked(99, true), 0);
        assert!(!sel.is_checked(3));
    }

    #[test]
    fn count_matches_positions_for_mixed_sequence() {
        let mut sel = SelectionTracker::new(20);
        let ops = [
            (1, true),
            (5, true),
            (1, true),
            (19, true),
            (5, false),
            (25, true),
            (0, true),
            (19, false),
            (8, true),
        ];
        for (pos, checked) in ops {
            let count = sel.set_checked(pos, checked);
            assert_eq!(count, sel.checked_positions().len());
        }
        assert_eq!(sel.checked_positions(), vec![0, 1, 8]);
    }

    #[test]
    fn checked_positions_are_ascending() {
        let mut sel = SelectionTracker::new(10);
        sel.set_checked(9, true);
        sel.set_checked(2, true);
        sel.set_checked(5, true);
        assert_eq!(sel.checked_positions(), vec![2, 5, 9]);
    }

    #[test]
    fn clear_all_empties() {
        let mut sel = SelectionTracker::new(10);
        sel.check_all();
        assert_eq!(sel.count(), 10);
        sel.clear_all();
        assert_eq!(sel.count(), 0);
    }

    #[test]
    fn removal_drops_and_shifts() {
        let mut sel = SelectionTracker::new(10);
        sel.set_checked(2, true);
        sel.set_checked(5, true);
        sel.set_checked(8, true);
        sel.on_removed(5);
        assert_eq!(sel.checked_positions(), vec![2, 7]);
        assert_eq!(sel.len(), 9);
    }

    #[test]
    fn insertion_shifts_later_checks() {
        let mut sel = SelectionTracker::new(5);
        sel.set_checked(1, true);
        sel.set_checked(3, true);
        sel.on_inserted(2);
        assert_eq!(sel.checked_positions(), vec![1, 4]);
        assert_eq!(sel.len(), 6);
    }
}
