use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use url::Url;

use super::Extras;
use super::state::{ConnectionState, VolumeHandling};
use crate::error::{Result, RouteError};
use crate::vocabulary;

/// A route as the platform media-routing service represents it
///
/// Capabilities are a flat feature set which the platform requires to be
/// non-empty. Routes converted from a descriptor without capabilities carry
/// [`vocabulary::FEATURE_EMPTY`]; use [`NativeRoute::real_features`] to skip it.
/// Deserialization goes through [`NativeRouteBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NativeRouteBuilder")]
pub struct NativeRoute {
    id: String,
    name: String,
    description: Option<String>,
    icon_uri: Option<Url>,
    connection_state: ConnectionState,
    volume_handling: VolumeHandling,
    volume: u32,
    volume_max: u32,
    features: BTreeSet<String>,
    extras: Extras,
}

impl NativeRoute {
    /// Create a builder with the two required fields
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> NativeRouteBuilder {
        NativeRouteBuilder::new(id, name)
    }

    /// Route ID
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// User-visible route name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-visible description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Icon URI
    #[must_use]
    pub fn icon_uri(&self) -> Option<&Url> {
        self.icon_uri.as_ref()
    }

    /// Connection state
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    /// Volume handling mode
    #[must_use]
    pub fn volume_handling(&self) -> VolumeHandling {
        self.volume_handling
    }

    /// Current volume
    #[must_use]
    pub fn volume(&self) -> u32 {
        self.volume
    }

    /// Maximum volume
    #[must_use]
    pub fn volume_max(&self) -> u32 {
        self.volume_max
    }

    /// Feature set, including the empty sentinel if present
    #[must_use]
    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    /// Features excluding the empty sentinel
    pub fn real_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(String::as_str)
            .filter(|f| !vocabulary::is_empty_sentinel(f))
    }

    /// Check if the route advertises the given feature
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Opaque extras bag
    #[must_use]
    pub fn extras(&self) -> &Extras {
        &self.extras
    }
}

/// Builder for [`NativeRoute`]
#[derive(Debug, Clone, Deserialize)]
pub struct NativeRouteBuilder {
    id: String,
    name: String,
    description: Option<String>,
    icon_uri: Option<Url>,
    connection_state: ConnectionState,
    volume_handling: VolumeHandling,
    volume: u32,
    volume_max: u32,
    features: BTreeSet<String>,
    extras: Extras,
}

impl NativeRouteBuilder {
    /// Create a builder with the two required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            icon_uri: None,
            connection_state: ConnectionState::default(),
            volume_handling: VolumeHandling::default(),
            volume: 0,
            volume_max: 0,
            features: BTreeSet::new(),
            extras: Extras::new(),
        }
    }

    /// Set or clear description
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Set or clear icon URI
    #[must_use]
    pub fn icon_uri(mut self, icon_uri: Option<Url>) -> Self {
        self.icon_uri = icon_uri;
        self
    }

    /// Set connection state
    #[must_use]
    pub fn connection_state(mut self, state: ConnectionState) -> Self {
        self.connection_state = state;
        self
    }

    /// Set volume handling
    #[must_use]
    pub fn volume_handling(mut self, handling: VolumeHandling) -> Self {
        self.volume_handling = handling;
        self
    }

    /// Set current volume
    #[must_use]
    pub fn volume(mut self, volume: u32) -> Self {
        self.volume = volume;
        self
    }

    /// Set maximum volume
    #[must_use]
    pub fn volume_max(mut self, volume_max: u32) -> Self {
        self.volume_max = volume_max;
        self
    }

    /// Add a single feature
    #[must_use]
    pub fn add_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Add several features
    #[must_use]
    pub fn add_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    /// Check if no features have been added yet
    #[must_use]
    pub fn has_no_features(&self) -> bool {
        self.features.is_empty()
    }

    /// Replace the extras bag
    #[must_use]
    pub fn extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Validate and build the route
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, the feature set is
    /// empty, or the volume exceeds the maximum volume
    pub fn build(self) -> Result<NativeRoute> {
        if self.id.is_empty() {
            return Err(RouteError::missing("id"));
        }
        if self.name.is_empty() {
            return Err(RouteError::missing("name"));
        }
        if self.features.is_empty() {
            return Err(RouteError::EmptyFeatures { route_id: self.id });
        }
        if self.volume > self.volume_max {
            return Err(RouteError::VolumeOutOfRange {
                volume: self.volume,
                volume_max: self.volume_max,
            });
        }
        Ok(self.assemble())
    }

    /// Build without validation, for callers that already hold valid parts
    pub(crate) fn assemble(self) -> NativeRoute {
        NativeRoute {
            id: self.id,
            name: self.name,
            description: self.description,
            icon_uri: self.icon_uri,
            connection_state: self.connection_state,
            volume_handling: self.volume_handling,
            volume: self.volume,
            volume_max: self.volume_max,
            features: self.features,
            extras: self.extras,
        }
    }
}

impl TryFrom<NativeRouteBuilder> for NativeRoute {
    type Error = RouteError;

    fn try_from(builder: NativeRouteBuilder) -> Result<Self> {
        builder.build()
    }
}
