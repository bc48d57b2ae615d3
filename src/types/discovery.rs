use serde::{Deserialize, Serialize};

/// Describes the control categories an application wants routes for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSelector {
    control_categories: Vec<String>,
}

impl RouteSelector {
    /// Create a selector from a list of categories
    ///
    /// Duplicates are kept; the selector mirrors what the caller asked for.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            control_categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Requested categories in the order given
    #[must_use]
    pub fn control_categories(&self) -> &[String] {
        &self.control_categories
    }

    /// Check if the selector requests no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.control_categories.is_empty()
    }

    /// Check if the selector requests the given category
    #[must_use]
    pub fn has_control_category(&self, category: &str) -> bool {
        self.control_categories.iter().any(|c| c == category)
    }

    /// A selector is valid when none of its categories is blank
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.control_categories
            .iter()
            .all(|c| !c.trim().is_empty())
    }
}

/// An application's request to discover routes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRequest {
    selector: RouteSelector,
    active_scan: bool,
}

impl DiscoveryRequest {
    /// Create a discovery request
    #[must_use]
    pub fn new(selector: RouteSelector, active_scan: bool) -> Self {
        Self {
            selector,
            active_scan,
        }
    }

    /// The requested categories
    #[must_use]
    pub fn selector(&self) -> &RouteSelector {
        &self.selector
    }

    /// Whether an active (more expensive) scan was requested
    #[must_use]
    pub fn is_active_scan(&self) -> bool {
        self.active_scan
    }

    /// Derived from the selector's validity
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.selector.is_valid()
    }
}

/// Native discovery preference handed to the platform routing service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryPreference {
    preferred_features: Vec<String>,
    should_perform_active_scan: bool,
}

impl DiscoveryPreference {
    /// Create a preference
    #[must_use]
    pub fn new(preferred_features: Vec<String>, should_perform_active_scan: bool) -> Self {
        Self {
            preferred_features,
            should_perform_active_scan,
        }
    }

    /// The inert preference: no features, passive scan
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Preferred features in request order
    #[must_use]
    pub fn preferred_features(&self) -> &[String] {
        &self.preferred_features
    }

    /// Whether the platform should scan actively
    #[must_use]
    pub fn should_perform_active_scan(&self) -> bool {
        self.should_perform_active_scan
    }

    /// Check if this preference discovers nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferred_features.is_empty()
    }
}
