use crate::model::{
    ActionId, ActionSession, ActionSetId, MenuConfig, SelectionTracker, SessionPhase,
};

/// Side effects the host must carry out after a controller transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// A contextual session began
    Started,
    /// Re-derive the visible actions; the set changed
    Invalidate(ActionSetId),
    /// The session is over and the selection has been cleared
    Ended,
}

/// Drives the contextual action session from the checked count.
#[derive(Debug, Clone)]
pub struct ActionSessionController {
    session: Option<ActionSession>,
    menus: MenuConfig,
}

impl ActionSessionController {
    pub fn new(menus: MenuConfig) -> Self {
        ActionSessionController {
            session: None,
            menus,
        }
    }

    pub fn session(&self) -> Option<&ActionSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some_and(|s| s.active)
    }

    pub fn phase(&self) -> SessionPhase {
        self.session
            .map_or(SessionPhase::Idle, |s| SessionPhase::for_count(s.selected_count))
    }

    /// Actions currently on the bar. Empty outside a session.
    pub fn visible_actions(&self) -> &[ActionId] {
        match self.session {
            Some(s) => self.menus.actions(s.action_set),
            None => &[],
        }
    }

    pub fn allows(&self, action: ActionId) -> bool {
        self.visible_actions().contains(&action)
    }

    /// React to the selection's current count. Calling this again with the
    /// same count produces no effects.
    pub fn sync(&mut self, selection: &mut SelectionTracker) -> Vec<SessionEffect> {
        let count = selection.count();
        let phase = SessionPhase::for_count(count);
        let mut effects = Vec::new();

        let Some(set) = phase.action_set() else {
            if self.session.is_some() {
                effects.extend(self.finish(selection));
            }
            return effects;
        };

        match &mut self.session {
            None => {
                tracing::info!(selected = count, "action session started");
                self.session = Some(ActionSession {
                    active: true,
                    selected_count: count,
                    action_set: set,
                });
                effects.push(SessionEffect::Started);
                effects.push(SessionEffect::Invalidate(set));
            }
            Some(session) => {
                session.selected_count = count;
                if session.action_set != set {
                    tracing::debug!(selected = count, ?set, "action set changed");
                    session.action_set = set;
                    effects.push(SessionEffect::Invalidate(set));
                }
            }
        }
        effects
    }

    /// End the session explicitly. Clears the selection. Returns `None` when
    /// no session was running.
    pub fn finish(&mut self, selection: &mut SelectionTracker) -> Option<SessionEffect> {
        let session = self.session.take()?;
        selection.clear_all();
        tracing::info!(selected = session.selected_count, "action session ended");
        Some(SessionEffect::Ended)
    }
}
