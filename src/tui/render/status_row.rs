use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let fill = Style::default().bg(bg);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            Line::from(super::pad_between(
                spans,
                Span::styled("Enter search  Esc cancel", dim),
                width,
                fill,
            ))
        }
        Mode::Navigate => {
            if let Some(toast) = &app.toast {
                Line::from(Span::styled(
                    format!(" {}", toast.message),
                    Style::default().fg(app.theme.green).bg(bg),
                ))
            } else if let Some(pattern) = &app.last_search {
                let spans = vec![Span::styled(format!("/{}", pattern), dim)];
                Line::from(super::pad_between(
                    spans,
                    Span::styled("n/N next/prev", dim),
                    width,
                    fill,
                ))
            } else if app.config.ui.show_key_hints {
                Line::from(Span::styled(" ? help  / search  q quit", dim))
            } else {
                Line::from(Span::styled(" ".repeat(width), fill))
            }
        }
    };

    frame.render_widget(Paragraph::new(line).style(fill), area);
}
