use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::board::icons::{icon_for, status_icon, ticket_priority_icon};
use crate::board::{heading_for, Group};
use crate::model::ticket::Ticket;
use crate::ui::theme::{icon_color, icon_glyph, ACCENT};

const MIN_COLUMN_WIDTH: u16 = 30;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let groups = app.groups();

    if groups.is_empty() {
        render_placeholder(f, area, app);
        return;
    }

    // Scroll horizontally so the focused column is always on screen.
    let fits = usize::from((area.width / MIN_COLUMN_WIDTH).max(1));
    let visible = fits.min(groups.len());
    let first = app.selected_column.saturating_sub(visible - 1);

    let constraints = vec![Constraint::Ratio(1, visible as u32); visible];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (slot, group) in groups.iter().skip(first).take(visible).enumerate() {
        let index = first + slot;
        let focused = index == app.selected_column;
        render_column(f, chunks[slot], group, focused, app.selected_card);
    }
}

fn render_column(f: &mut Frame, area: Rect, group: &Group<'_>, focused: bool, selected_card: usize) {
    let icon = icon_for(&group.key);
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(icon_glyph(icon), Style::default().fg(icon_color(icon))),
        Span::styled(
            format!(" {} ", heading_for(&group.key)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", group.tickets.len()),
            Style::default().fg(ratatui::style::Color::DarkGray),
        ),
    ]);

    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(ratatui::style::Color::DarkGray)
    };

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = group
        .tickets
        .iter()
        .map(|ticket| ListItem::new(card_lines(ticket, width)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        )
        .highlight_style(Style::default().bg(ratatui::style::Color::Rgb(0x26, 0x2A, 0x33)));

    let mut state = ListState::default();
    if focused {
        state.select(Some(selected_card));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn card_lines(ticket: &Ticket, width: usize) -> Vec<Line<'static>> {
    let priority = ticket_priority_icon(ticket.priority);
    let status = status_icon(&ticket.status);

    // Truncate title to fit beside the priority glyph
    let max_title = width.saturating_sub(icon_glyph(priority).chars().count() + 1);
    let title: String = ticket.title.chars().take(max_title).collect();

    let mut details = vec![
        Span::styled(icon_glyph(status), Style::default().fg(icon_color(status))),
        Span::raw(" "),
    ];
    if !ticket.tag.is_empty() {
        details.push(Span::styled("● ", Style::default().fg(ratatui::style::Color::DarkGray)));
        details.push(Span::styled(
            ticket.tag.to_string(),
            Style::default().fg(ratatui::style::Color::Gray),
        ));
    }

    vec![
        Line::from(Span::styled(
            ticket.id.clone(),
            Style::default().fg(ratatui::style::Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(icon_glyph(priority), Style::default().fg(icon_color(priority))),
            Span::raw(" "),
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(details),
        Line::raw(""),
    ]
}

fn render_placeholder(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.loading() {
        "Loading tickets..."
    } else if app.prefs.grouping().is_none() {
        "No grouping selected. Press d to open Display and pick one."
    } else {
        "No tickets."
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(ratatui::style::Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
