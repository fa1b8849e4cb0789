use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::search::{compile_pattern, next_match};
use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel search
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }

        // Execute search
        (_, KeyCode::Enter) => {
            if !app.search_input.is_empty() {
                app.last_search = Some(std::mem::take(&mut app.search_input));
                if let Some(re) = app.last_search.as_deref().and_then(compile_pattern) {
                    // Search starts at the cursor row itself
                    let from = app.cursor.checked_sub(1).unwrap_or(usize::MAX);
                    match next_match(app.session.store(), &re, from, false) {
                        Some(position) => app.cursor = position,
                        None => app.set_status("no matches"),
                    }
                }
            }
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            if app.search_input.is_empty() {
                app.mode = Mode::Navigate;
            } else {
                pop_grapheme(&mut app.search_input);
            }
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
        }

        _ => {}
    }
}
