use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::model::{
    ActionId, ActionSetId, AppConfig, ItemStore, SelectionTracker, StoreChange, UndoId, UndoRecord,
};

use super::action_session::{ActionSessionController, SessionEffect};
use super::undo::{PendingUndoQueue, Reinsert};

/// Everything the outside world can tell the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    ItemTapped(usize),
    CheckedChanged { position: usize, checked: bool },
    /// Dismiss gesture on one row
    SwipeDismiss(usize),
    ActionInvoked(ActionId),
    /// The user closed the action bar
    SessionEnded,
    /// The undo button on the revocation affordance
    Undo,
    Revoke(UndoId),
    /// The view is going away; nothing may stay revocable
    Teardown,
}

/// What the presentation layer needs to hear about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    Toast { message: String },
    SessionStarted,
    ActionsChanged { set: ActionSetId },
    SessionEnded,
    ItemsChanged { change: StoreChange },
    UndoOffered { title: String },
    Reverted { label: String, position: usize },
    Discarded { label: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Toast { message } => write!(f, "toast: {}", message),
            Notice::SessionStarted => write!(f, "session started"),
            Notice::ActionsChanged { set } => match set {
                ActionSetId::Single => write!(f, "actions: single"),
                ActionSetId::Multiple => write!(f, "actions: multiple"),
            },
            Notice::SessionEnded => write!(f, "session ended"),
            Notice::ItemsChanged { change } => match change {
                StoreChange::Appended { position, label } => {
                    write!(f, "appended {} at {}", label, position)
                }
                StoreChange::Inserted { position, label } => {
                    write!(f, "inserted {} at {}", label, position)
                }
                StoreChange::Removed { position, label } => {
                    write!(f, "removed {} at {}", label, position)
                }
            },
            Notice::UndoOffered { title } => write!(f, "undo offered: {}", title),
            Notice::Reverted { label, position } => {
                write!(f, "reverted {} to {}", label, position)
            }
            Notice::Discarded { label } => write!(f, "discarded {}", label),
        }
    }
}

/// The list's interaction core: items, checks, the action session and the
/// pending deletes, driven one event at a time.
pub struct ListSession {
    store: ItemStore,
    selection: SelectionTracker,
    controller: ActionSessionController,
    undo: PendingUndoQueue,
}

impl ListSession {
    pub fn new(store: ItemStore, config: &AppConfig) -> Self {
        let selection = SelectionTracker::new(store.len());
        ListSession {
            store,
            selection,
            controller: ActionSessionController::new(config.menus.clone()),
            undo: PendingUndoQueue::new(config.undo.mode, config.undo.window()),
        }
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn controller(&self) -> &ActionSessionController {
        &self.controller
    }

    pub fn undo_queue(&self) -> &PendingUndoQueue {
        &self.undo
    }

    pub fn handle(&mut self, event: ListEvent, now: Instant) -> Vec<Notice> {
        let mut notices = Vec::new();
        match event {
            ListEvent::ItemTapped(position) => {
                if let Some(label) = self.store.get(position) {
                    notices.push(Notice::Toast {
                        message: format!(
                            "clicked on item {} position: {} id: {}",
                            label, position, position
                        ),
                    });
                }
            }
            ListEvent::CheckedChanged { position, checked } => {
                let count = self.selection.set_checked(position, checked);
                tracing::debug!(position, checked, count, "checked state changed");
                self.sync_session(&mut notices);
            }
            ListEvent::SwipeDismiss(position) => self.swipe_dismiss(position, now, &mut notices),
            ListEvent::ActionInvoked(action) => {
                if self.controller.allows(action) {
                    match action {
                        ActionId::SelectAll => self.select_all(&mut notices),
                        ActionId::Delete => self.delete_selected(now, &mut notices),
                    }
                } else {
                    tracing::debug!(?action, "action not on the visible bar");
                }
            }
            ListEvent::SessionEnded => self.finish_session(&mut notices),
            ListEvent::Undo => {
                let reinserts = self.undo.undo();
                self.revert(reinserts, &mut notices);
            }
            ListEvent::Revoke(id) => {
                let reinserts: Vec<Reinsert> = self.undo.revoke(id).into_iter().collect();
                self.revert(reinserts, &mut notices);
            }
            ListEvent::Teardown => {
                let discarded = self.undo.discard_all();
                push_discarded(discarded, &mut notices);
                self.finish_session(&mut notices);
            }
        }
        notices
    }

    /// Let the undo window run. Called from the host's event loop.
    pub fn tick(&mut self, now: Instant) -> Vec<Notice> {
        let mut notices = Vec::new();
        push_discarded(self.undo.tick(now), &mut notices);
        notices
    }

    fn sync_session(&mut self, notices: &mut Vec<Notice>) {
        for effect in self.controller.sync(&mut self.selection) {
            notices.push(match effect {
                SessionEffect::Started => Notice::SessionStarted,
                SessionEffect::Invalidate(set) => Notice::ActionsChanged { set },
                SessionEffect::Ended => Notice::SessionEnded,
            });
        }
    }

    fn finish_session(&mut self, notices: &mut Vec<Notice>) {
        if self.controller.finish(&mut self.selection).is_some() {
            notices.push(Notice::SessionEnded);
        }
    }

    fn select_all(&mut self, notices: &mut Vec<Notice>) {
        let count = self.selection.check_all();
        tracing::debug!(count, "selected all");
        self.sync_session(notices);
    }

    fn remove(&mut self, position: usize, notices: &mut Vec<Notice>) -> Option<String> {
        let change = self.store.remove_at(position)?;
        self.selection.apply(&change);
        let label = change.label().to_string();
        notices.push(Notice::ItemsChanged { change });
        Some(label)
    }

    fn swipe_dismiss(&mut self, position: usize, now: Instant, notices: &mut Vec<Notice>) {
        let Some(label) = self.remove(position, notices) else {
            return;
        };
        let enqueued = self.undo.enqueue_batch([(label, position)]);
        push_discarded(enqueued.superseded, notices);
        // A dismissed row may have been checked
        self.sync_session(notices);
        self.undo.arm(now);
        self.offer_undo(notices);
    }

    /// Remove every checked item, one pending record each, then close the
    /// session and show the affordance.
    fn delete_selected(&mut self, now: Instant, notices: &mut Vec<Notice>) {
        let positions = self.selection.checked_positions();
        let mut removed = Vec::with_capacity(positions.len());
        // Descending, so each position is still the item's pre-delete position
        for &position in positions.iter().rev() {
            if let Some(label) = self.remove(position, notices) {
                removed.push((label, position));
            }
        }
        let enqueued = self.undo.enqueue_batch(removed);
        push_discarded(enqueued.superseded, notices);
        self.finish_session(notices);
        self.undo.arm(now);
        self.offer_undo(notices);
    }

    /// Reinsert what was revoked and refresh the affordance. Nothing is
    /// reported when nothing was revoked.
    fn revert(&mut self, reinserts: Vec<Reinsert>, notices: &mut Vec<Notice>) {
        if reinserts.is_empty() {
            return;
        }
        self.apply_reinserts(reinserts, notices);
        self.offer_undo(notices);
    }

    fn apply_reinserts(&mut self, reinserts: Vec<Reinsert>, notices: &mut Vec<Notice>) {
        for reinsert in reinserts {
            let change = self.store.insert_at(reinsert.position, reinsert.label);
            self.selection.apply(&change);
            tracing::info!(
                label = change.label(),
                position = change.position(),
                "reinserted item"
            );
            notices.push(Notice::Reverted {
                label: change.label().to_string(),
                position: change.position(),
            });
            notices.push(Notice::ItemsChanged { change });
        }
        self.sync_session(notices);
    }

    fn offer_undo(&self, notices: &mut Vec<Notice>) {
        if let Some(title) = self.undo.affordance_title() {
            notices.push(Notice::UndoOffered { title });
        }
    }
}

fn push_discarded(records: Vec<UndoRecord>, notices: &mut Vec<Notice>) {
    notices.extend(
        records
            .into_iter()
            .map(|r| Notice::Discarded { label: r.label }),
    );
}
