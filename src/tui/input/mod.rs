mod navigate;
mod search;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+Q quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key, now),
        Mode::Search => handle_search(app, key),
    }
}

/// Shift+letter arrives as lowercase with SHIFT on some terminals.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}


#[cfg(test)]
mod tests {
    use super::test_keys::{ch, key};
    use super::*;
    use crate::model::{AppConfig, ItemStore};
    use crate::ops::ListSession;

    fn app() -> App {
        let config = AppConfig::default();
        App::new(ListSession::new(ItemStore::numbered(5), &config), config)
    }

    #[test]
    fn shift_g_is_normalized() {
        let k = normalize_key(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::SHIFT));
        assert_eq!(k.code, KeyCode::Char('G'));
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_overlay_eats_one_key() {
        let mut app = app();
        let now = Instant::now();
        handle_key(&mut app, ch('?'), now);
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Down), now);
        assert!(!app.show_help);
        assert_eq!(app.cursor, 0);
    }
}
