use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, MenuEntry, MENU};
use crate::ui::theme::ACCENT;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let button_style = if app.show_display_menu {
        Style::default()
            .fg(ratatui::style::Color::Black)
            .bg(ACCENT)
    } else {
        Style::default().fg(ACCENT)
    };

    let line = Line::from(vec![
        Span::styled(" ☰ Display ", button_style),
        Span::raw("  "),
        Span::styled("Ticket List", Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Dropdown drawn over the board, anchored under the Display button.
pub fn render_menu(f: &mut Frame, area: Rect, app: &App) {
    // Two section headers plus one row per entry, plus borders.
    let height = (MENU.len() as u16 + 4).min(area.height);
    let width = 26.min(area.width);
    let menu_area = Rect::new(area.x, area.y, width, height);

    let mut items: Vec<ListItem> = Vec::new();
    let mut last_section = None;
    for (i, entry) in MENU.iter().enumerate() {
        let (section, label) = match entry {
            MenuEntry::Grouping(mode) => ("Grouping", mode.label()),
            MenuEntry::Ordering(mode) => ("Ordering", mode.label()),
        };
        if last_section != Some(section) {
            items.push(ListItem::new(Line::from(Span::styled(
                section,
                Style::default().add_modifier(Modifier::BOLD),
            ))));
            last_section = Some(section);
        }

        let marker = if app.is_chosen(*entry) { "✓" } else { " " };
        let style = if i == app.menu_cursor {
            Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {marker} {label}"),
            style,
        ))));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(" Display "),
    );

    f.render_widget(Clear, menu_area);
    f.render_widget(list, menu_area);
}
