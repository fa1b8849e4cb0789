pub mod action_bar;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;
pub mod undo_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let undo_rows = if app.session.undo_queue().has_pending() {
        1
    } else {
        0
    };

    // Layout: action bar | list | undo bar (while deletes are pending) | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(undo_rows),
            Constraint::Length(1),
        ])
        .split(area);

    action_bar::render_action_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    if undo_rows > 0 {
        undo_bar::render_undo_bar(frame, app, chunks[2]);
    }
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Left text and a right-aligned hint on one row; the hint is dropped when it does not fit.
pub(super) fn pad_between<'a>(
    mut spans: Vec<Span<'a>>,
    hint: Span<'a>,
    width: usize,
    fill: Style,
) -> Vec<Span<'a>> {
    let content_width: usize = spans
        .iter()
        .map(|s| crate::util::unicode::display_width(&s.content))
        .sum();
    let hint_width = crate::util::unicode::display_width(&hint.content);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), fill));
        spans.push(hint);
    }
    spans
}
