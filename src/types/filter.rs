use serde::{Deserialize, Serialize};

/// A set of control categories (and optionally actions) a route supports
///
/// Categories and actions keep insertion order and ignore duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FilterRecord")]
pub struct ControlFilter {
    categories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    actions: Vec<String>,
}

impl ControlFilter {
    /// Create an empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter holding a single category
    pub fn with_category(category: impl Into<String>) -> Self {
        let mut filter = Self::new();
        filter.add_category(category);
        filter
    }

    /// Create a filter from a list of categories
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::new();
        for category in categories {
            filter.add_category(category);
        }
        filter
    }

    /// Add a category, ignoring it if already present
    pub fn add_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Add an action, ignoring it if already present
    pub fn add_action(&mut self, action: impl Into<String>) {
        let action = action.into();
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
    }

    /// Builder method to add an action
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.add_action(action);
        self
    }

    /// Categories in insertion order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Actions in insertion order
    #[must_use]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Number of categories
    #[must_use]
    pub fn count_categories(&self) -> usize {
        self.categories.len()
    }

    /// Check if the filter holds the given category
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

/// Serialized shape of a [`ControlFilter`], deduplicated on load
#[derive(Deserialize)]
struct FilterRecord {
    categories: Vec<String>,
    #[serde(default)]
    actions: Vec<String>,
}

impl From<FilterRecord> for ControlFilter {
    fn from(record: FilterRecord) -> Self {
        let mut filter = Self::from_categories(record.categories);
        for action in record.actions {
            filter.add_action(action);
        }
        filter
    }
}
