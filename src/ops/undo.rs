use std::time::{Duration, Instant};

use crate::model::{UndoId, UndoMode, UndoRecord, UndoState};

/// Settled records kept around for inspection before the oldest are dropped
const SETTLED_HISTORY_LIMIT: usize = 500;

/// Where a revoked record's label goes back into the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reinsert {
    pub id: UndoId,
    pub label: String,
    pub position: usize,
}

/// Result of adding a batch of records
#[derive(Debug, Clone, Default)]
pub struct Enqueued {
    pub ids: Vec<UndoId>,
    /// Records discarded because single-undo mode allows one batch at a time
    pub superseded: Vec<UndoRecord>,
}

/// Queue of reversible deletes plus the undo-window timer.
///
/// Records are owned here, independently of the item store: reverting only
/// needs the record itself. The window is armed when the affordance is shown
/// and fulfilled exactly once, either by `tick` discarding everything pending
/// or by the queue running empty.
pub struct PendingUndoQueue {
    records: Vec<UndoRecord>,
    next_id: u64,
    mode: UndoMode,
    window: Duration,
    deadline: Option<Instant>,
}

impl PendingUndoQueue {
    pub fn new(mode: UndoMode, window: Duration) -> Self {
        PendingUndoQueue {
            records: Vec::new(),
            next_id: 1,
            mode,
            window,
            deadline: None,
        }
    }

    pub fn mode(&self) -> UndoMode {
        self.mode
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Add one pending record. Same as a batch of one.
    pub fn enqueue(&mut self, label: impl Into<String>, original_position: usize) -> UndoId {
        let label = label.into();
        let id = UndoId(self.next_id);
        self.enqueue_batch([(label, original_position)]);
        id
    }

    /// Add the pending records produced by one user action. In single-undo
    /// mode whatever was pending before is discarded first.
    pub fn enqueue_batch<I, S>(&mut self, items: I) -> Enqueued
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let superseded = if self.mode == UndoMode::Single {
            self.discard_pending()
        } else {
            Vec::new()
        };

        let mut ids = Vec::new();
        for (label, position) in items {
            let id = UndoId(self.next_id);
            self.next_id += 1;
            self.records.push(UndoRecord::new(id, label, position));
            ids.push(id);
        }
        self.prune_settled();
        Enqueued { ids, superseded }
    }

    /// Revoke one record. `None` unless it is still pending.
    pub fn revoke(&mut self, id: UndoId) -> Option<Reinsert> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        if !record.revoke() {
            return None;
        }
        let reinsert = Reinsert {
            id,
            label: record.label.clone(),
            position: record.original_position,
        };
        if !self.has_pending() {
            self.deadline = None;
        }
        Some(reinsert)
    }

    /// The affordance's undo button. Which records revert depends on the
    /// mode; results are in the order the reinsertions must be applied
    /// (newest delete first).
    pub fn undo(&mut self) -> Vec<Reinsert> {
        let ids: Vec<UndoId> = match self.mode {
            UndoMode::Multi => self.pending().last().map(|r| r.id).into_iter().collect(),
            UndoMode::Single | UndoMode::Collapsed => {
                self.pending().rev().map(|r| r.id).collect()
            }
        };
        ids.into_iter().filter_map(|id| self.revoke(id)).collect()
    }

    /// Discard everything pending and cancel the window. Returns the records
    /// that changed state; a second call returns nothing.
    pub fn discard_all(&mut self) -> Vec<UndoRecord> {
        self.deadline = None;
        self.discard_pending()
    }

    fn discard_pending(&mut self) -> Vec<UndoRecord> {
        let mut discarded = Vec::new();
        for record in self.records.iter_mut() {
            if record.discard() {
                tracing::warn!(
                    label = %record.label,
                    position = record.original_position,
                    "item now finally discarded"
                );
                discarded.push(record.clone());
            }
        }
        discarded
    }

    /// Start (or restart) the undo window.
    pub fn arm(&mut self, now: Instant) {
        if self.has_pending() {
            self.deadline = Some(now + self.window);
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fulfil the window if it has elapsed.
    pub fn tick(&mut self, now: Instant) -> Vec<UndoRecord> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.discard_all(),
            _ => Vec::new(),
        }
    }

    pub fn pending(&self) -> impl DoubleEndedIterator<Item = &UndoRecord> {
        self.records.iter().filter(|r| r.is_pending())
    }

    pub fn pending_count(&self) -> usize {
        self.pending().count()
    }

    pub fn has_pending(&self) -> bool {
        self.records.iter().any(UndoRecord::is_pending)
    }

    pub fn record(&self, id: UndoId) -> Option<&UndoRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// First pending record carrying this label
    pub fn find_pending(&self, label: &str) -> Option<UndoId> {
        self.pending().find(|r| r.label == label).map(|r| r.id)
    }

    /// Text for the revocation affordance, `None` when nothing is pending.
    pub fn affordance_title(&self) -> Option<String> {
        let count = self.pending_count();
        let newest = self.pending().last()?;
        match self.mode {
            UndoMode::Collapsed if count > 1 => Some(format!("{} items deleted", count)),
            UndoMode::Single if count > 1 => Some(format!("{} items deleted", count)),
            _ => Some(newest.title.clone()),
        }
    }

    fn prune_settled(&mut self) {
        let settled = self
            .records
            .iter()
            .filter(|r| r.state != UndoState::Pending)
            .count();
        if settled <= SETTLED_HISTORY_LIMIT {
            return;
        }
        let mut excess = settled - SETTLED_HISTORY_LIMIT;
        self.records.retain(|r| {
            if excess > 0 && !r.is_pending() {
                excess -= 1;
                false
            } else {
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(5000);

    fn queue(mode: UndoMode) -> PendingUndoQueue {
        PendingUndoQueue::new(mode, WINDOW)
    }

    #[test]
    fn enqueue_then_revoke_returns_recorded_position() {
        let mut q = queue(UndoMode::Collapsed);
        let id = q.enqueue("7", 7);
        let reinsert = q.revoke(id).unwrap();
        assert_eq!(reinsert.label, "7");
        assert_eq!(reinsert.position, 7);
        assert_eq!(q.record(id).unwrap().state, UndoState::Reverted);
    }

    #[test]
    fn revoke_twice_is_noop() {
        let mut q = queue(UndoMode::Collapsed);
        let id = q.enqueue("7", 7);
        assert!(q.revoke(id).is_some());
        assert!(q.revoke(id).is_none());
    }

    #[test]
    fn revoke_after_discard_all_is_noop() {
        let mut q = queue(UndoMode::Collapsed);
        let id = q.enqueue("7", 7);
        q.discard_all();
        assert!(q.revoke(id).is_none());
        assert_eq!(q.record(id).unwrap().state, UndoState::Discarded);
    }

    #[test]
    fn discard_all_is_idempotent() {
        let mut q = queue(UndoMode::Collapsed);
        q.enqueue("1", 1);
        q.enqueue("2", 2);
        assert_eq!(q.discard_all().len(), 2);
        assert!(q.discard_all().is_empty());
        assert!(!q.has_pending());
    }

    #[test]
    fn revoke_unknown_id_is_noop() {
        let mut q = queue(UndoMode::Collapsed);
        assert!(q.revoke(UndoId(99)).is_none());
    }

    #[test]
    fn window_elapses_once() {
        let mut q = queue(UndoMode::Collapsed);
        let start = Instant::now();
        q.enqueue("1", 1);
        q.arm(start);
        assert!(q.tick(start + Duration::from_millis(4999)).is_empty());
        assert_eq!(q.tick(start + WINDOW).len(), 1);
        assert!(q.deadline().is_none());
        assert!(q.tick(start + WINDOW * 2).is_empty());
    }

    #[test]
    fn revoking_last_pending_cancels_window() {
        let mut q = queue(UndoMode::Collapsed);
        let start = Instant::now();
        let id = q.enqueue("1", 1);
        q.arm(start);
        q.revoke(id);
        assert!(q.deadline().is_none());
    }

    #[test]
    fn arm_without_pending_stays_disarmed() {
        let mut q = queue(UndoMode::Collapsed);
        q.arm(Instant::now());
        assert!(q.deadline().is_none());
    }

    #[test]
    fn collapsed_undo_reverts_all_newest_first() {
        let mut q = queue(UndoMode::Collapsed);
        q.enqueue("a", 3);
        q.enqueue("b", 3);
        let reinserts = q.undo();
        let labels: Vec<&str> = reinserts.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert!(!q.has_pending());
    }

    #[test]
    fn multi_undo_reverts_newest_only() {
        let mut q = queue(UndoMode::Multi);
        q.enqueue("a", 1);
        q.enqueue("b", 2);
        let reinserts = q.undo();
        assert_eq!(reinserts.len(), 1);
        assert_eq!(reinserts[0].label, "b");
        assert_eq!(q.pending_count(), 1);
        assert_eq!(q.affordance_title().as_deref(), Some("a deleted"));
    }

    #[test]
    fn single_mode_supersedes_previous_batch() {
        let mut q = queue(UndoMode::Single);
        let first = q.enqueue("a", 1);
        let batch = q.enqueue_batch([("b", 2), ("c", 3)]);
        assert_eq!(batch.ids.len(), 2);
        assert_eq!(batch.superseded.len(), 1);
        assert_eq!(batch.superseded[0].label, "a");
        assert_eq!(q.record(first).unwrap().state, UndoState::Discarded);
        assert_eq!(q.pending_count(), 2);
    }

    #[test]
    fn affordance_titles() {
        let mut q = queue(UndoMode::Collapsed);
        assert!(q.affordance_title().is_none());
        q.enqueue("4", 4);
        assert_eq!(q.affordance_title().as_deref(), Some("4 deleted"));
        q.enqueue("9", 9);
        assert_eq!(q.affordance_title().as_deref(), Some("2 items deleted"));
    }

    #[test]
    fn find_pending_skips_settled_records() {
        let mut q = queue(UndoMode::Collapsed);
        let first = q.enqueue("5", 5);
        let second = q.enqueue("5", 6);
        q.revoke(first);
        assert_eq!(q.find_pending("5"), Some(second));
    }

    #[test]
    fn settled_history_is_capped() {
        let mut q = queue(UndoMode::Collapsed);
        for i in 0..=SETTLED_HISTORY_LIMIT {
            let id = q.enqueue(i.to_string(), i);
            q.revoke(id);
        }
        q.enqueue("last", 0);
        assert_eq!(q.records.len(), SETTLED_HISTORY_LIMIT + 1);
        assert_eq!(q.pending_count(), 1);
    }
}
