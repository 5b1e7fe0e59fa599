//! Persisted display preferences.

pub mod file;
#[cfg(test)]
pub mod memory;

use tracing::debug;

use crate::model::display::{GroupingMode, OrderingMode};

pub const GROUPING_KEY: &str = "selectedGrouping";
pub const ORDERING_KEY: &str = "selectedOrdering";

/// String key/value storage that outlives the process.
///
/// Writes never fail from the caller's point of view; implementations log
/// and drop persistence errors.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct Preferences {
    store: Box<dyn PreferenceStore>,
    grouping: Option<GroupingMode>,
    ordering: Option<OrderingMode>,
}

impl Preferences {
    /// Read both choices from the store. Absent or unrecognized values are
    /// treated as unset.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let grouping = store.get(GROUPING_KEY).and_then(|s| GroupingMode::parse(&s));
        let ordering = store.get(ORDERING_KEY).and_then(|s| OrderingMode::parse(&s));
        debug!(?grouping, ?ordering, "loaded display preferences");
        Self {
            store,
            grouping,
            ordering,
        }
    }

    pub fn grouping(&self) -> Option<GroupingMode> {
        self.grouping
    }

    pub fn ordering(&self) -> Option<OrderingMode> {
        self.ordering
    }

    pub fn select_grouping(&mut self, mode: GroupingMode) {
        self.grouping = Some(mode);
        self.store.set(GROUPING_KEY, mode.as_str());
    }

    pub fn select_ordering(&mut self, mode: OrderingMode) {
        self.ordering = Some(mode);
        self.store.set(ORDERING_KEY, mode.as_str());
    }
}
