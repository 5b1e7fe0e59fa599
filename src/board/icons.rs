use super::GroupKey;
use crate::model::ticket::Status;

/// Fixed set of board icons. Rendering maps each one to a glyph and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Todo,
    InProgress,
    Done,
    Backlog,
    Cancelled,
    NoPriority,
    Low,
    Medium,
    High,
    Urgent,
}

impl Icon {
    /// Used for any key that has no icon of its own.
    pub const DEFAULT: Icon = Icon::Todo;

    pub fn for_status(status: Status) -> Icon {
        match status {
            Status::Todo => Icon::Todo,
            Status::InProgress => Icon::InProgress,
            Status::Done => Icon::Done,
            Status::Backlog => Icon::Backlog,
            Status::Cancelled => Icon::Cancelled,
        }
    }

    pub fn for_priority(priority: i64) -> Option<Icon> {
        match priority {
            0 => Some(Icon::NoPriority),
            1 => Some(Icon::Low),
            2 => Some(Icon::Medium),
            3 => Some(Icon::High),
            4 => Some(Icon::Urgent),
            _ => None,
        }
    }
}

/// Icon for a column header. User ids and unknown statuses get the default.
pub fn icon_for(key: &GroupKey) -> Icon {
    match key {
        GroupKey::Status(status) => status_icon(status),
        GroupKey::Priority(p) => Icon::for_priority(*p).unwrap_or(Icon::DEFAULT),
        GroupKey::User(_) => Icon::DEFAULT,
    }
}

pub fn status_icon(status: &str) -> Icon {
    Status::parse(status).map_or(Icon::DEFAULT, Icon::for_status)
}

/// Priority icon on a card. Levels outside 0..=4 show as "no priority".
pub fn ticket_priority_icon(priority: i64) -> Icon {
    Icon::for_priority(priority).unwrap_or(Icon::NoPriority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_known_key_has_a_distinct_icon() {
        let mut icons = HashSet::new();
        for status in Status::ALL {
            icons.insert(icon_for(&GroupKey::Status(status.as_str().into())));
        }
        for p in 0..=4 {
            icons.insert(icon_for(&GroupKey::Priority(p)));
        }
        assert_eq!(icons.len(), 10);
    }

    #[test]
    fn unknown_keys_fall_back_to_default() {
        assert_eq!(icon_for(&GroupKey::Status("Blocked".into())), Icon::DEFAULT);
        assert_eq!(icon_for(&GroupKey::Priority(7)), Icon::DEFAULT);
        assert_eq!(icon_for(&GroupKey::User("usr-1".into())), Icon::DEFAULT);
        assert_eq!(status_icon(""), Icon::DEFAULT);
    }

    #[test]
    fn out_of_range_card_priority_shows_no_priority() {
        assert_eq!(ticket_priority_icon(4), Icon::Urgent);
        assert_eq!(ticket_priority_icon(-1), Icon::NoPriority);
        assert_eq!(ticket_priority_icon(5), Icon::NoPriority);
    }
}
