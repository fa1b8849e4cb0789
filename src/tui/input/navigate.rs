use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::model::ActionId;
use crate::ops::ListEvent;
use crate::ops::search::next_match;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::Home | KeyCode::Char('g') => app.cursor = 0,
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor = app.item_count().saturating_sub(1);
        }

        KeyCode::Enter => {
            if app.item_count() > 0 {
                app.dispatch(ListEvent::ItemTapped(app.cursor), now);
            }
        }
        KeyCode::Char(' ') => toggle_check(app, now),
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.item_count() > 0 {
                app.dispatch(ListEvent::SwipeDismiss(app.cursor), now);
            }
        }
        KeyCode::Char('u') => {
            if app.session.undo_queue().has_pending() {
                app.dispatch(ListEvent::Undo, now);
            }
        }

        KeyCode::Esc => {
            if app.session.controller().is_active() {
                app.dispatch(ListEvent::SessionEnded, now);
            } else {
                app.last_search = None;
            }
        }

        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('n') => jump_to_match(app, false),
        KeyCode::Char('N') => jump_to_match(app, true),

        KeyCode::Char(c) => {
            // Action bar keys only work while their action is showing
            if let Some(action) = ActionId::from_key(c)
                && app.session.controller().allows(action)
            {
                app.dispatch(ListEvent::ActionInvoked(action), now);
            }
        }
        _ => {}
    }
}

fn toggle_check(app: &mut App, now: Instant) {
    if app.item_count() == 0 {
        return;
    }
    let position = app.cursor;
    let checked = !app.session.selection().is_checked(position);
    app.dispatch(ListEvent::CheckedChanged { position, checked }, now);
}

fn jump_to_match(app: &mut App, backward: bool) {
    let Some(re) = app.active_search_re() else {
        return;
    };
    match next_match(app.session.store(), &re, app.cursor, backward) {
        Some(position) => app.cursor = position,
        None => app.set_status("no matches"),
    }
}
