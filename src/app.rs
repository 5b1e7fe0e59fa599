use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::board::{self, Group};
use crate::event::KeyAction;
use crate::model::display::{GroupingMode, OrderingMode};
use crate::model::ticket::Snapshot;
use crate::prefs::Preferences;
use crate::source::{self, FetchHandle, TicketSource};

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Resize,
    SnapshotLoaded(Snapshot),
    FetchFailed(String),
    Quit,
}

/// One line of the Display dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Grouping(GroupingMode),
    Ordering(OrderingMode),
}

pub const MENU: [MenuEntry; 5] = [
    MenuEntry::Grouping(GroupingMode::ByUser),
    MenuEntry::Grouping(GroupingMode::ByPriority),
    MenuEntry::Grouping(GroupingMode::ByStatus),
    MenuEntry::Ordering(OrderingMode::Priority),
    MenuEntry::Ordering(OrderingMode::Title),
];

pub struct App {
    pub snapshot: Snapshot,
    pub prefs: Preferences,
    pub fetched_at: Option<DateTime<Local>>,
    pub show_display_menu: bool,
    pub menu_cursor: usize,
    pub selected_column: usize,
    pub selected_card: usize,
    pub should_quit: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    source: Option<Box<dyn TicketSource>>,
    fetch: Option<FetchHandle>,
}

impl App {
    pub fn new(
        prefs: Preferences,
        source: Box<dyn TicketSource>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            snapshot: Snapshot::default(),
            prefs,
            fetched_at: None,
            show_display_menu: false,
            menu_cursor: 0,
            selected_column: 0,
            selected_card: 0,
            should_quit: false,
            action_tx,
            source: Some(source),
            fetch: None,
        }
    }

    /// Kick off the one fetch this app will ever make. Later calls do nothing.
    pub fn start_fetch(&mut self) {
        if let Some(source) = self.source.take() {
            self.fetch = Some(source::spawn_fetch(source, self.action_tx.clone()));
        }
    }

    /// True while the fetch is in flight.
    pub fn loading(&self) -> bool {
        self.fetch.is_some()
    }

    /// Current board, recomputed from the snapshot and preferences.
    pub fn groups(&self) -> Vec<Group<'_>> {
        board::transform(
            &self.snapshot.tickets,
            self.prefs.grouping(),
            self.prefs.ordering(),
        )
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Resize => {}
            Action::SnapshotLoaded(snapshot) => {
                self.snapshot = snapshot;
                self.fetched_at = Some(Local::now());
                self.fetch = None;
                self.clamp_selection();
            }
            Action::FetchFailed(msg) => {
                // Reported by the fetch task; keep whatever we had.
                debug!(error = %msg, "fetch ended without a snapshot");
                self.fetch = None;
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyAction) {
        if self.show_display_menu {
            self.handle_menu_key(key);
            return;
        }

        match key {
            KeyAction::ToggleDisplay => {
                self.show_display_menu = true;
                self.menu_cursor = 0;
            }
            KeyAction::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.selected_card = 0;
                }
            }
            KeyAction::Right => {
                if self.selected_column + 1 < self.groups().len() {
                    self.selected_column += 1;
                    self.selected_card = 0;
                }
            }
            KeyAction::Up => {
                if self.selected_card > 0 {
                    self.selected_card -= 1;
                }
            }
            KeyAction::Down => {
                let len = self
                    .groups()
                    .get(self.selected_column)
                    .map_or(0, |g| g.tickets.len());
                if self.selected_card + 1 < len {
                    self.selected_card += 1;
                }
            }
            KeyAction::Select | KeyAction::Escape => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => {
                if self.menu_cursor > 0 {
                    self.menu_cursor -= 1;
                }
            }
            KeyAction::Down => {
                if self.menu_cursor < MENU.len() - 1 {
                    self.menu_cursor += 1;
                }
            }
            KeyAction::Select => self.choose(MENU[self.menu_cursor]),
            KeyAction::Escape | KeyAction::ToggleDisplay => {
                self.show_display_menu = false;
            }
            KeyAction::Left | KeyAction::Right => {}
        }
    }

    /// Apply a dropdown choice. The menu stays open so both lists can be
    /// set in one visit.
    pub fn choose(&mut self, entry: MenuEntry) {
        match entry {
            MenuEntry::Grouping(mode) => {
                info!(grouping = %mode, "grouping selected");
                self.prefs.select_grouping(mode);
                self.selected_column = 0;
                self.selected_card = 0;
            }
            MenuEntry::Ordering(mode) => {
                info!(ordering = %mode, "ordering selected");
                self.prefs.select_ordering(mode);
                self.selected_card = 0;
            }
        }
    }

    pub fn is_chosen(&self, entry: MenuEntry) -> bool {
        match entry {
            MenuEntry::Grouping(mode) => self.prefs.grouping() == Some(mode),
            MenuEntry::Ordering(mode) => self.prefs.ordering() == Some(mode),
        }
    }

    fn clamp_selection(&mut self) {
        let groups = self.groups();
        let columns = groups.len();
        let column = self.selected_column.min(columns.saturating_sub(1));
        let cards = groups.get(column).map_or(0, |g| g.tickets.len());
        let card = self.selected_card.min(cards.saturating_sub(1));
        debug!(column, card, "clamped board selection");
        self.selected_column = column;
        self.selected_card = card;
    }
}
