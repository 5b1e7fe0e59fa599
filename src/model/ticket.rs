use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Expected in 0..=4, but anything the server sends is kept as-is.
    pub priority: i64,
    pub status: String,
    #[serde(default)]
    pub tag: Tag,
}

/// The endpoint sends `tag` either as a single string or as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    One(String),
    Many(Vec<String>),
}

impl Default for Tag {
    fn default() -> Self {
        Tag::Many(Vec::new())
    }
}

impl Tag {
    pub fn is_empty(&self) -> bool {
        match self {
            Tag::One(s) => s.is_empty(),
            Tag::Many(v) => v.iter().all(String::is_empty),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::One(s) => f.write_str(s),
            Tag::Many(v) => f.write_str(&v.join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

/// One successful read of the ticket endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Todo,
    InProgress,
    Done,
    Backlog,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Todo,
        Status::InProgress,
        Status::Done,
        Status::Backlog,
        Status::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "Todo",
            Status::InProgress => "In progress",
            Status::Done => "Done",
            Status::Backlog => "Backlog",
            Status::Cancelled => "Cancelled",
        }
    }

    /// Exact match on the wire spelling; anything else is unknown.
    pub fn parse(s: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
