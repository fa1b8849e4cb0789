use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, ItemStore};
use crate::ops::ListSession;
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An App over the given labels with default config.
pub fn app_with_items(labels: &[&str]) -> App {
    let config = AppConfig::default();
    let store = ItemStore::from_labels(labels.iter().copied());
    App::new(ListSession::new(store, &config), config)
}

/// An App over "0".."count".
pub fn app_numbered(count: usize) -> App {
    let config = AppConfig::default();
    App::new(ListSession::new(ItemStore::numbered(count), &config), config)
}
