pub mod columns;
pub mod footer;
pub mod theme;
pub mod toolbar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // toolbar
            Constraint::Min(6),    // board
            Constraint::Length(1), // footer
        ])
        .split(size);

    toolbar::render(f, vertical[0], app);
    columns::render(f, vertical[1], app);
    footer::render(f, vertical[2], app);

    // Dropdown last so it sits on top of the board
    if app.show_display_menu {
        toolbar::render_menu(f, vertical[1], app);
    }
}
