use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if app.show_display_menu {
        spans.push(hint("↑↓", "move"));
        spans.push(hint("enter", "choose"));
        spans.push(hint("esc", "close"));
    } else {
        spans.push(hint("←→", "columns"));
        spans.push(hint("↑↓", "cards"));
        spans.push(hint("d", "display"));
    }
    spans.push(hint("q", "quit"));

    spans.push(Span::raw("  "));
    if app.loading() {
        spans.push(Span::styled(
            " LOADING ",
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(ratatui::style::Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(
            format!(
                " {} tickets · {} users ",
                app.snapshot.tickets.len(),
                app.snapshot.users.len()
            ),
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(ratatui::style::Color::DarkGray),
        ));
    }

    if let Some(at) = &app.fetched_at {
        spans.push(Span::styled(
            format!("  updated {}", at.format("%H:%M:%S")),
            Style::default().fg(ratatui::style::Color::DarkGray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    f.render_widget(paragraph, area);
}

fn hint(key: &str, desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {key}:{desc} "),
        Style::default().fg(ratatui::style::Color::DarkGray),
    )
}
