use std::fmt;

/// How tickets are split into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingMode {
    ByUser,
    ByPriority,
    ByStatus,
}

impl GroupingMode {
    pub const ALL: [GroupingMode; 3] = [
        GroupingMode::ByUser,
        GroupingMode::ByPriority,
        GroupingMode::ByStatus,
    ];

    /// Stored form, shared with the preference file.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupingMode::ByUser => "ByUser",
            GroupingMode::ByPriority => "ByPriority",
            GroupingMode::ByStatus => "ByStatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupingMode::ByUser => "By User",
            GroupingMode::ByPriority => "By Priority",
            GroupingMode::ByStatus => "By Status",
        }
    }

    pub fn parse(s: &str) -> Option<GroupingMode> {
        GroupingMode::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How tickets are sorted inside each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingMode {
    Priority,
    Title,
}

impl OrderingMode {
    pub const ALL: [OrderingMode; 2] = [OrderingMode::Priority, OrderingMode::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::Priority => "Priority",
            OrderingMode::Title => "Title",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn parse(s: &str) -> Option<OrderingMode> {
        OrderingMode::ALL.into_iter().find(|mode| mode.as_str() == s)
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
