use std::fmt;

use serde::{Deserialize, Serialize};

/// An entry in the contextual action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    SelectAll,
    Delete,
}

impl ActionId {
    pub fn label(self) -> &'static str {
        match self {
            ActionId::SelectAll => "Select All",
            ActionId::Delete => "Delete",
        }
    }

    /// Key that invokes this action while a session is active
    pub fn key(self) -> char {
        match self {
            ActionId::SelectAll => 'a',
            ActionId::Delete => 'd',
        }
    }

    pub fn from_key(c: char) -> Option<Self> {
        match c {
            'a' => Some(ActionId::SelectAll),
            'd' => Some(ActionId::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which action set (menu) the bar presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSetId {
    Single,
    Multiple,
}

/// Phase of the contextual session, derived from the checked count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Single,
    Multiple,
}

impl SessionPhase {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => SessionPhase::Idle,
            1 => SessionPhase::Single,
            _ => SessionPhase::Multiple,
        }
    }

    pub fn action_set(self) -> Option<ActionSetId> {
        match self {
            SessionPhase::Idle => None,
            SessionPhase::Single => Some(ActionSetId::Single),
            SessionPhase::Multiple => Some(ActionSetId::Multiple),
        }
    }
}

/// The live contextual session. Exists only between the first check and the
/// session's end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSession {
    pub active: bool,
    pub selected_count: usize,
    pub action_set: ActionSetId,
}
