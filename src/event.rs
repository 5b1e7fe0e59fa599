use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::app::Action;

pub async fn run_event_loop(tx: mpsc::UnboundedSender<Action>) {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let action = match event {
            Ok(Event::Key(key)) => key_to_action(key),
            Ok(Event::Resize(_, _)) => Some(Action::Resize),
            Ok(_) => None,
            Err(_) => break,
        };
        if let Some(action) = action {
            if tx.send(action).is_err() {
                break;
            }
        }
    }
}

fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Key(KeyAction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Key(KeyAction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Key(KeyAction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Key(KeyAction::Right)),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('d') => Some(Action::Key(KeyAction::ToggleDisplay)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Key(KeyAction::Select)),
        KeyCode::Esc => Some(Action::Key(KeyAction::Escape)),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Up,
    Down,
    Left,
    Right,
    Select,
    Escape,
    ToggleDisplay,
}
