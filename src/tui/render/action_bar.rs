use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Top row: the item count, or the contextual action bar while a session runs
pub fn render_action_bar(frame: &mut Frame, app: &App, area: Rect) {
    let controller = app.session.controller();

    let Some(session) = controller.session() else {
        let bg = app.theme.background;
        let line = Line::from(Span::styled(
            format!(" {} items", app.item_count()),
            Style::default().fg(app.theme.text).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    };

    let bg = app.theme.session_bg;
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.highlight).bg(bg);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let mut spans = vec![Span::styled(
        format!(" {} selected", session.selected_count),
        title_style,
    )];
    for action in controller.visible_actions() {
        spans.push(Span::styled("  ", desc_style));
        spans.push(Span::styled(format!("[{}]", action.key()), key_style));
        spans.push(Span::styled(format!(" {}", action.label()), desc_style));
    }
    let hint = Span::styled("Esc done ", Style::default().fg(app.theme.dim).bg(bg));
    let spans = super::pad_between(spans, hint, area.width as usize, Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::ListEvent;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;
    use std::time::Instant;

    #[test]
    fn idle_shows_count() {
        let app = app_numbered(100);
        let output = render_to_string(40, 1, |frame, area| {
            render_action_bar(frame, &app, area);
        });
        assert_eq!(output, " 100 items");
    }

    #[test]
    fn session_lists_visible_actions() {
        let mut app = app_numbered(5);
        let now = Instant::now();
        app.dispatch(
            ListEvent::CheckedChanged {
                position: 0,
                checked: true,
            },
            now,
        );
        app.dispatch(
            ListEvent::CheckedChanged {
                position: 3,
                checked: true,
            },
            now,
        );
        let output = render_to_string(60, 1, |frame, area| {
            render_action_bar(frame, &app, area);
        });
        assert_eq!(
            output,
            " 2 selected  [a] Select All  [d] Delete            Esc done"
        );
    }

    #[test]
    fn narrow_bar_drops_hint() {
        let mut app = app_numbered(5);
        app.dispatch(
            ListEvent::CheckedChanged {
                position: 1,
                checked: true,
            },
            Instant::now(),
        );
        let output = render_to_string(30, 1, |frame, area| {
            render_action_bar(frame, &app, area);
        });
        assert_eq!(output, " 1 selected  [a] Select All  [");
    }
}
