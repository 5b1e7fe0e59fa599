use ratatui::style::Color;

use crate::board::icons::Icon;

pub const ACCENT: Color = Color::Cyan;

pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Todo => "○",
        Icon::InProgress => "◑",
        Icon::Done => "●",
        Icon::Backlog => "◌",
        Icon::Cancelled => "⊘",
        Icon::NoPriority => "···",
        Icon::Low => "▂",
        Icon::Medium => "▂▄",
        Icon::High => "▂▄▆",
        Icon::Urgent => "!",
    }
}

pub fn icon_color(icon: Icon) -> Color {
    match icon {
        Icon::Todo => Color::Gray,
        Icon::InProgress => Color::Yellow,
        Icon::Done => Color::Rgb(0x5E, 0x6A, 0xD2),
        Icon::Backlog => Color::DarkGray,
        Icon::Cancelled => Color::DarkGray,
        Icon::NoPriority => Color::DarkGray,
        Icon::Low => Color::Gray,
        Icon::Medium => Color::Blue,
        Icon::High => Color::Yellow,
        Icon::Urgent => Color::Red,
    }
}
