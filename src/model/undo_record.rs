use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle for one pending delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UndoId(pub u64);

impl fmt::Display for UndoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoState {
    Pending,
    /// Revoked by the user; the item went back into the list
    Reverted,
    /// Window elapsed or the view went away; permanent
    Discarded,
}

/// How the undo affordance treats several pending deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoMode {
    /// Only the latest batch is revocable; a new delete discards the previous one
    Single,
    /// Each undo reverts the most recent pending delete
    Multi,
    /// One undo reverts every pending delete
    #[default]
    Collapsed,
}

/// A reversible delete: the removed label and where it stood at removal time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndoRecord {
    pub id: UndoId,
    pub label: String,
    pub original_position: usize,
    pub title: String,
    pub state: UndoState,
}

impl UndoRecord {
    pub fn new(id: UndoId, label: impl Into<String>, original_position: usize) -> Self {
        let label = label.into();
        UndoRecord {
            id,
            title: format!("{} deleted", label),
            label,
            original_position,
            state: UndoState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == UndoState::Pending
    }

    /// Pending -> Reverted. Returns false (and changes nothing) from any
    /// other state.
    pub fn revoke(&mut self) -> bool {
        if self.is_pending() {
            self.state = UndoState::Reverted;
            true
        } else {
            false
        }
    }

    /// Pending -> Discarded. Returns false from any other state.
    pub fn discard(&mut self) -> bool {
        if self.is_pending() {
            self.state = UndoState::Discarded;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_label() {
        let rec = UndoRecord::new(UndoId(1), "42", 42);
        assert_eq!(rec.title, "42 deleted");
        assert!(rec.is_pending());
    }

    #[test]
    fn revoke_then_discard_stays_reverted() {
        let mut rec = UndoRecord::new(UndoId(1), "a", 0);
        assert!(rec.revoke());
        assert!(!rec.discard());
        assert_eq!(rec.state, UndoState::Reverted);
    }

    #[test]
    fn discard_then_revoke_stays_discarded() {
        let mut rec = UndoRecord::new(UndoId(1), "a", 0);
        assert!(rec.discard());
        assert!(!rec.revoke());
        assert!(!rec.discard());
        assert_eq!(rec.state, UndoState::Discarded);
    }

    #[test]
    fn default_mode_is_collapsed() {
        assert_eq!(UndoMode::default(), UndoMode::Collapsed);
    }
}
