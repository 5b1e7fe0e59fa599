//! Grouping and ordering of tickets into board columns.
//!
//! Everything here is a pure function of the snapshot and the two display
//! preferences, recomputed on every frame.

pub mod icons;

use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use crate::model::display::{GroupingMode, OrderingMode};
use crate::model::ticket::Ticket;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    User(String),
    Priority(i64),
    Status(String),
}

impl GroupKey {
    fn of(ticket: &Ticket, mode: GroupingMode) -> GroupKey {
        match mode {
            GroupingMode::ByUser => GroupKey::User(ticket.user_id.clone()),
            GroupingMode::ByPriority => GroupKey::Priority(ticket.priority),
            GroupingMode::ByStatus => GroupKey::Status(ticket.status.clone()),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::User(id) => f.write_str(id),
            GroupKey::Priority(p) => write!(f, "{p}"),
            GroupKey::Status(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub key: GroupKey,
    pub tickets: Vec<&'a Ticket>,
}

/// Group then order. With no grouping selected there are no columns at all,
/// not a single catch-all column.
pub fn transform(
    tickets: &[Ticket],
    grouping: Option<GroupingMode>,
    ordering: Option<OrderingMode>,
) -> Vec<Group<'_>> {
    let Some(grouping) = grouping else {
        return Vec::new();
    };
    let mut groups = partition(tickets, grouping);
    if let Some(ordering) = ordering {
        for group in &mut groups {
            order(&mut group.tickets, ordering);
        }
    }
    groups
}

/// Stable partition. Groups appear in order of the first ticket carrying
/// their key; tickets keep fetch order within a group.
pub fn partition(tickets: &[Ticket], mode: GroupingMode) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for ticket in tickets {
        let key = GroupKey::of(ticket, mode);
        match index.get(&key) {
            Some(&i) => groups[i].tickets.push(ticket),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    tickets: vec![ticket],
                });
            }
        }
    }

    groups
}

/// Sorts one column in place. Both orderings are stable.
pub fn order(tickets: &mut [&Ticket], mode: OrderingMode) {
    match mode {
        OrderingMode::Priority => tickets.sort_by_key(|t| Reverse(t.priority)),
        OrderingMode::Title => match title_collator() {
            Some(collator) => tickets.sort_by(|a, b| collator.compare(&a.title, &b.title)),
            None => tickets.sort_by(|a, b| a.title.cmp(&b.title)),
        },
    }
}

/// Root-locale collator for titles. Accents and case are secondary to the
/// base letters, so "Éclair" sorts with the e's and "apple" next to "Apple".
fn title_collator() -> Option<Collator> {
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "title collation unavailable, falling back to code point order");
            None
        }
    }
}

/// Column heading: priority levels get their names, every other key is
/// shown as-is.
pub fn heading_for(key: &GroupKey) -> Cow<'_, str> {
    match key {
        GroupKey::Priority(p) => match priority_label(*p) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(p.to_string()),
        },
        GroupKey::User(id) => Cow::Borrowed(id),
        GroupKey::Status(status) => Cow::Borrowed(status),
    }
}

pub fn priority_label(priority: i64) -> Option<&'static str> {
    match priority {
        0 => Some("No priority"),
        1 => Some("Low"),
        2 => Some("Medium"),
        3 => Some("High"),
        4 => Some("Urgent"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ticket::Tag;
    use proptest::prelude::*;

    fn ticket(id: &str, user: &str, priority: i64, status: &str, title: &str) -> Ticket {
        Ticket {
            id: id.to_string(),
            title: title.to_string(),
            user_id: user.to_string(),
            priority,
            status: status.to_string(),
            tag: Tag::default(),
        }
    }

    fn ids(group: &Group<'_>) -> Vec<String> {
        group.tickets.iter().map(|t| t.id.clone()).collect()
    }

    fn sample() -> Vec<Ticket> {
        vec![
            ticket("CAM-1", "usr-1", 4, "Todo", "Update profile page"),
            ticket("CAM-2", "usr-2", 3, "In progress", "Add multi-language support"),
            ticket("CAM-3", "usr-1", 1, "Backlog", "Optimize database queries"),
            ticket("CAM-4", "usr-3", 3, "Todo", "Implement email notifications"),
            ticket("CAM-5", "usr-2", 0, "Done", "enhance search"),
        ]
    }

    #[test]
    fn no_grouping_yields_no_groups() {
        let tickets = sample();
        assert!(transform(&tickets, None, None).is_empty());
        assert!(transform(&tickets, None, Some(OrderingMode::Title)).is_empty());
    }

    #[test]
    fn unknown_grouping_string_yields_no_groups() {
        let tickets = vec![ticket("1", "u", 0, "Todo", "t")];
        let grouping = GroupingMode::parse("Unknown");
        assert!(transform(&tickets, grouping, None).is_empty());
    }

    #[test]
    fn groups_follow_first_appearance() {
        let tickets = vec![
            ticket("1", "u", 0, "Done", "a"),
            ticket("2", "u", 0, "Todo", "b"),
        ];
        let groups = transform(&tickets, Some(GroupingMode::ByStatus), None);
        let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["Done", "Todo"]);
    }

    #[test]
    fn group_by_user_keeps_fetch_order() {
        let tickets = sample();
        let groups = transform(&tickets, Some(GroupingMode::ByUser), None);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, GroupKey::User("usr-1".into()));
        assert_eq!(ids(&groups[0]), vec!["CAM-1", "CAM-3"]);
        assert_eq!(ids(&groups[1]), vec!["CAM-2", "CAM-5"]);
        assert_eq!(ids(&groups[2]), vec!["CAM-4"]);
    }

    #[test]
    fn group_by_priority_uses_integer_keys() {
        let tickets = sample();
        let groups = transform(&tickets, Some(GroupingMode::ByPriority), None);
        let keys: Vec<GroupKey> = groups.iter().map(|g| g.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Priority(4),
                GroupKey::Priority(3),
                GroupKey::Priority(1),
                GroupKey::Priority(0),
            ]
        );
        assert_eq!(ids(&groups[1]), vec!["CAM-2", "CAM-4"]);
    }

    #[test]
    fn priority_ordering_is_descending_and_stable() {
        let tickets = vec![
            ticket("1", "u", 2, "Todo", "a"),
            ticket("2", "u", 4, "Todo", "b"),
            ticket("3", "u", 2, "Todo", "c"),
        ];
        let groups = transform(
            &tickets,
            Some(GroupingMode::ByStatus),
            Some(OrderingMode::Priority),
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["2", "1", "3"]);
    }

    #[test]
    fn title_ordering_groups_case_variants() {
        let tickets = vec![
            ticket("1", "u", 0, "Todo", "banana"),
            ticket("2", "u", 0, "Todo", "Apple"),
            ticket("3", "u", 0, "Todo", "cherry"),
            ticket("4", "u", 0, "Todo", "apple"),
        ];
        let groups = transform(&tickets, Some(GroupingMode::ByUser), Some(OrderingMode::Title));
        // Lowercase sorts before uppercase when the letters tie.
        assert_eq!(ids(&groups[0]), vec!["4", "2", "1", "3"]);
    }

    #[test]
    fn title_ordering_places_accented_letters_with_their_base() {
        let titles = ["Zebra", "Éclair", "Apple", "apple", "banana"];
        let tickets: Vec<Ticket> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| ticket(&i.to_string(), "u", 0, "Todo", title))
            .collect();
        let groups = transform(&tickets, Some(GroupingMode::ByUser), Some(OrderingMode::Title));
        let sorted: Vec<&str> = groups[0].tickets.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(sorted, vec!["apple", "Apple", "banana", "Éclair", "Zebra"]);
    }

    #[test]
    fn identical_titles_keep_fetch_order() {
        let tickets = vec![
            ticket("1", "u", 0, "Todo", "Résumé"),
            ticket("2", "u", 0, "Todo", "alpha"),
            ticket("3", "u", 0, "Todo", "Résumé"),
        ];
        let groups = transform(&tickets, Some(GroupingMode::ByUser), Some(OrderingMode::Title));
        assert_eq!(ids(&groups[0]), vec!["2", "1", "3"]);
    }

    #[test]
    fn unset_ordering_keeps_grouping_order() {
        let tickets = sample();
        let grouped = transform(&tickets, Some(GroupingMode::ByUser), None);
        let parsed = OrderingMode::parse("Newest");
        let again = transform(&tickets, Some(GroupingMode::ByUser), parsed);
        assert_eq!(grouped, again);
    }

    #[test]
    fn headings() {
        assert_eq!(heading_for(&GroupKey::Priority(3)), "High");
        assert_eq!(heading_for(&GroupKey::Priority(0)), "No priority");
        assert_eq!(heading_for(&GroupKey::Priority(4)), "Urgent");
        assert_eq!(heading_for(&GroupKey::Priority(9)), "9");
        assert_eq!(heading_for(&GroupKey::User("SomeUserId".into())), "SomeUserId");
        assert_eq!(heading_for(&GroupKey::Status("In progress".into())), "In progress");
    }

    fn arb_ticket() -> impl Strategy<Value = Ticket> {
        (
            0u32..1000,
            prop::sample::select(vec!["usr-1", "usr-2", "usr-3"]),
            0i64..5,
            prop::sample::select(vec!["Todo", "In progress", "Done", "Backlog", "Cancelled"]),
            prop::sample::select(vec!["alpha", "Alpha", "beta", "Éclair", "Gamma", "delta"]),
        )
            .prop_map(|(n, user, priority, status, title)| {
                ticket(&format!("T-{n}"), user, priority, status, title)
            })
    }

    fn arb_tickets() -> impl Strategy<Value = Vec<Ticket>> {
        prop::collection::vec(arb_ticket(), 0..40).prop_map(|mut tickets| {
            // Unique ids so positions can be tracked through the sort.
            for (i, t) in tickets.iter_mut().enumerate() {
                t.id = format!("T-{i}");
            }
            tickets
        })
    }

    fn position(tickets: &[Ticket], id: &str) -> usize {
        tickets.iter().position(|t| t.id == id).unwrap()
    }

    proptest! {
        #[test]
        fn partition_is_complete(
            tickets in arb_tickets(),
            mode in prop::sample::select(GroupingMode::ALL.to_vec()),
        ) {
            let groups = transform(&tickets, Some(mode), None);
            let mut seen: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.tickets.iter().map(|t| t.id.as_str()))
                .collect();
            seen.sort_unstable();
            let mut expected: Vec<&str> = tickets.iter().map(|t| t.id.as_str()).collect();
            expected.sort_unstable();
            prop_assert_eq!(seen, expected);

            for group in &groups {
                for t in &group.tickets {
                    prop_assert_eq!(&GroupKey::of(t, mode), &group.key);
                }
            }
        }

        #[test]
        fn orderings_are_stable(
            tickets in arb_tickets(),
            grouping in prop::sample::select(GroupingMode::ALL.to_vec()),
            ordering in prop::sample::select(OrderingMode::ALL.to_vec()),
        ) {
            let groups = transform(&tickets, Some(grouping), Some(ordering));
            let collator = title_collator().unwrap();
            for group in &groups {
                for pair in group.tickets.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let tied = match ordering {
                        OrderingMode::Priority => {
                            prop_assert!(a.priority >= b.priority);
                            a.priority == b.priority
                        }
                        OrderingMode::Title => {
                            let cmp = collator.compare(&a.title, &b.title);
                            prop_assert!(cmp != std::cmp::Ordering::Greater);
                            cmp == std::cmp::Ordering::Equal
                        }
                    };
                    if tied {
                        prop_assert!(position(&tickets, &a.id) < position(&tickets, &b.id));
                    }
                }
            }
        }
    }
}
