use serde::{Deserialize, Serialize};
use url::Url;

use super::Extras;
use super::filter::ControlFilter;
use super::state::{ConnectionState, DeviceType, VolumeHandling};
use crate::error::{Result, RouteError};

/// Platform-independent description of a media route
///
/// This is the application-side source of truth for a route. Build one with
/// [`RouteDescriptor::builder`]. Deserialization goes through the builder,
/// so it rejects the same values [`RouteDescriptorBuilder::build`] does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteDescriptorBuilder")]
#[allow(clippy::struct_excessive_bools)]
pub struct RouteDescriptor {
    id: String,
    name: String,
    description: Option<String>,
    icon_uri: Option<Url>,
    connection_state: ConnectionState,
    enabled: bool,
    can_disconnect: bool,
    volume_handling: VolumeHandling,
    volume: u32,
    volume_max: u32,
    control_filters: Vec<ControlFilter>,
    extras: Extras,
    device_type: DeviceType,
    is_dynamic_group_route: bool,
    group_member_ids: Vec<String>,
    client_package_name: Option<String>,
}

impl RouteDescriptor {
    /// Create a builder with the two required fields
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> RouteDescriptorBuilder {
        RouteDescriptorBuilder::new(id, name)
    }

    /// Unique route ID within its provider
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

    /// Whether the route can be selected
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the route can be disconnected without stopping playback
    #[must_use]
    pub fn can_disconnect(&self) -> bool {
        self.can_disconnect
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

    /// Control filters in declaration order
    #[must_use]
    pub fn control_filters(&self) -> &[ControlFilter] {
        &self.control_filters
    }

    /// Opaque extras bag
    #[must_use]
    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Device type
    #[must_use]
    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Whether this route is a dynamic group of other routes
    #[must_use]
    pub fn is_dynamic_group_route(&self) -> bool {
        self.is_dynamic_group_route
    }

    /// IDs of the member routes of a dynamic group
    #[must_use]
    pub fn group_member_ids(&self) -> &[String] {
        &self.group_member_ids
    }

    /// Package name of the client currently using the route
    #[must_use]
    pub fn client_package_name(&self) -> Option<&str> {
        self.client_package_name.as_deref()
    }
}

/// Builder for [`RouteDescriptor`]
#[derive(Debug, Clone, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct RouteDescriptorBuilder {
    id: String,
    name: String,
    description: Option<String>,
    icon_uri: Option<Url>,
    connection_state: ConnectionState,
    enabled: bool,
    can_disconnect: bool,
    volume_handling: VolumeHandling,
    volume: u32,
    volume_max: u32,
    control_filters: Vec<ControlFilter>,
    extras: Extras,
    device_type: DeviceType,
    is_dynamic_group_route: bool,
    group_member_ids: Vec<String>,
    client_package_name: Option<String>,
}

impl RouteDescriptorBuilder {
    /// Create a builder with the two required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            icon_uri: None,
            connection_state: ConnectionState::default(),
            enabled: true,
            can_disconnect: false,
            volume_handling: VolumeHandling::default(),
            volume: 0,
            volume_max: 0,
            control_filters: Vec::new(),
            extras: Extras::new(),
            device_type: DeviceType::default(),
            is_dynamic_group_route: false,
            group_member_ids: Vec::new(),
            client_package_name: None,
        }
    }

    /// Set description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set icon URI
    #[must_use]
    pub fn icon_uri(mut self, icon_uri: Url) -> Self {
        self.icon_uri = Some(icon_uri);
        self
    }

    /// Set connection state
    #[must_use]
    pub fn connection_state(mut self, state: ConnectionState) -> Self {
        self.connection_state = state;
        self
    }

    /// Set whether the route is enabled
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set whether the route can be disconnected
    #[must_use]
    pub fn can_disconnect(mut self, can_disconnect: bool) -> Self {
        self.can_disconnect = can_disconnect;
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

    /// Append a control filter
    #[must_use]
    pub fn add_control_filter(mut self, filter: ControlFilter) -> Self {
        self.control_filters.push(filter);
        self
    }

    /// Append several control filters
    #[must_use]
    pub fn add_control_filters(mut self, filters: impl IntoIterator<Item = ControlFilter>) -> Self {
        self.control_filters.extend(filters);
        self
    }

    /// Replace the extras bag
    #[must_use]
    pub fn extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    /// Set device type
    #[must_use]
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    /// Mark the route as a dynamic group route
    #[must_use]
    pub fn is_dynamic_group_route(mut self, is_group: bool) -> Self {
        self.is_dynamic_group_route = is_group;
        self
    }

    /// Append a dynamic group member ID
    #[must_use]
    pub fn add_group_member_id(mut self, member_id: impl Into<String>) -> Self {
        self.group_member_ids.push(member_id.into());
        self
    }

    /// Set client package name
    #[must_use]
    pub fn client_package_name(mut self, package: impl Into<String>) -> Self {
        self.client_package_name = Some(package.into());
        self
    }

    /// Validate and build the descriptor
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, or if the volume
    /// exceeds the maximum volume
    pub fn build(self) -> Result<RouteDescriptor> {
        if self.id.is_empty() {
            return Err(RouteError::missing("id"));
        }
        if self.name.is_empty() {
            return Err(RouteError::missing("name"));
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
    pub(crate) fn assemble(self) -> RouteDescriptor {
        RouteDescriptor {
            id: self.id,
            name: self.name,
            description: self.description,
            icon_uri: self.icon_uri,
            connection_state: self.connection_state,
            enabled: self.enabled,
            can_disconnect: self.can_disconnect,
            volume_handling: self.volume_handling,
            volume: self.volume,
            volume_max: self.volume_max,
            control_filters: self.control_filters,
            extras: self.extras,
            device_type: self.device_type,
            is_dynamic_group_route: self.is_dynamic_group_route,
            group_member_ids: self.group_member_ids,
            client_package_name: self.client_package_name,
        }
    }
}

impl TryFrom<RouteDescriptorBuilder> for RouteDescriptor {
    type Error = RouteError;

    fn try_from(builder: RouteDescriptorBuilder) -> Result<Self> {
        builder.build()
    }
}
