use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// The revocation affordance shown while deletes are pending
pub fn render_undo_bar(frame: &mut Frame, app: &App, area: Rect) {
    let Some(title) = app.session.undo_queue().affordance_title() else {
        return;
    };
    let bg = app.theme.background;
    let spans = vec![Span::styled(
        format!(" {}", title),
        Style::default().fg(app.theme.yellow).bg(bg),
    )];
    let hint = Span::styled(
        "[u] Undo ",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let spans = super::pad_between(spans, hint, area.width as usize, Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
