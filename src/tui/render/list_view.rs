use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Width of the " [x] " prefix
const CHECK_COL: usize = 5;

/// Render the item rows, keeping the cursor in view
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    if app.item_count() == 0 {
        let line = Line::from(Span::styled(
            " (no items)",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    app.scroll_to_cursor(height);

    let search_re = app.active_search_re();
    let selection = app.session.selection();
    let mut lines: Vec<Line> = Vec::with_capacity(height);

    for (position, label) in app
        .session
        .store()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let checked = selection.is_checked(position);
        let row_bg = if position == app.cursor {
            app.theme.cursor_bg
        } else if checked {
            app.theme.checked_bg
        } else {
            bg
        };
        let fg = if checked {
            app.theme.text_bright
        } else {
            app.theme.text
        };
        let base = Style::default().fg(fg).bg(row_bg);
        let mark = if checked { 'x' } else { ' ' };

        let mut spans = vec![Span::styled(
            format!(" [{}] ", mark),
            Style::default().fg(app.theme.highlight).bg(row_bg),
        )];
        let text = truncate_to_width(label, width.saturating_sub(CHECK_COL));
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg)
            .add_modifier(Modifier::BOLD);
        super::push_highlighted_spans(&mut spans, &text, base, match_style, search_re.as_ref());

        let used = CHECK_COL + display_width(&text);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), base));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::ListEvent;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;
    use ratatui::style::Color;
    use std::time::Instant;

    #[test]
    fn rows_show_check_state() {
        let mut app = app_numbered(3);
        app.dispatch(
            ListEvent::CheckedChanged {
                position: 1,
                checked: true,
            },
            Instant::now(),
        );
        let output = render_to_string(20, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] 0\n [x] 1\n [ ] 2");
    }

    #[test]
    fn empty_list_placeholder() {
        let mut app = app_with_items(&[]);
        let output = render_to_string(20, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " (no items)");
    }

    #[test]
    fn scrolls_to_cursor() {
        let mut app = app_numbered(10);
        app.cursor = 9;
        let output = render_to_string(20, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] 7\n [ ] 8\n [ ] 9");
        assert_eq!(app.scroll_offset, 7);
    }

    #[test]
    fn long_labels_truncate() {
        let mut app = app_with_items(&["a very long grocery item"]);
        let output = render_to_string(15, 1, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " [ ] a very lo\u{2026}");
    }

    #[test]
    fn cursor_row_gets_cursor_background() {
        let mut app = app_numbered(2);
        app.cursor = 1;
        let backend = ratatui::backend::TestBackend::new(10, 2);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_list_view(frame, &mut app, frame.area()))
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(6, 1)].bg, app.theme.cursor_bg);
        assert_ne!(buf[(6, 0)].bg, app.theme.cursor_bg);
        assert_ne!(app.theme.cursor_bg, Color::Reset);
    }
}
