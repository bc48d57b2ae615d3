//! Conversions between route descriptors and native routes
//!
//! All conversions are pure: absent input gives absent output, and nothing
//! is retained between calls.
//!
//! The two route directions are not inverses. Native routes have no room
//! for filter grouping, filter actions, the enabled and can-disconnect
//! flags, device type, dynamic group membership or the client package name.
//! A descriptor rebuilt from a native route is always enabled, never
//! disconnectable, and carries one single-category filter per feature.
//! [`unmapped_fields`] reports what a given descriptor would lose.

use tracing::{debug, trace, warn};

use crate::types::{
    DeviceType, DiscoveryPreference, DiscoveryRequest, NativeRoute, RouteDescriptor,
    TranslatorConfig,
};
use crate::vocabulary::{self, FEATURE_EMPTY};

/// Descriptor fields that native routes cannot carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnmappedField {
    /// Device type is not mapped
    DeviceType,
    /// Client package name is not mapped
    ClientPackageName,
    /// Dynamic group flag and member IDs are not mapped
    DynamicGroup,
    /// Filter actions are dropped when filters are flattened
    FilterActions,
    /// Disabled routes come back enabled
    Enabled,
    /// Disconnectable routes come back non-disconnectable
    CanDisconnect,
}

impl UnmappedField {
    /// Every field the native format cannot carry
    pub const ALL: [Self; 6] = [
        Self::DeviceType,
        Self::ClientPackageName,
        Self::DynamicGroup,
        Self::FilterActions,
        Self::Enabled,
        Self::CanDisconnect,
    ];

    /// Field name used in log events
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeviceType => "device_type",
            Self::ClientPackageName => "client_package_name",
            Self::DynamicGroup => "dynamic_group",
            Self::FilterActions => "filter_actions",
            Self::Enabled => "enabled",
            Self::CanDisconnect => "can_disconnect",
        }
    }
}

impl std::fmt::Display for UnmappedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List the values of `descriptor` that a native round trip would not keep
///
/// Fields left at the value a rebuilt descriptor gets anyway are not listed.
#[must_use]
pub fn unmapped_fields(descriptor: &RouteDescriptor) -> Vec<UnmappedField> {
    let mut lost = Vec::new();
    if descriptor.device_type() != DeviceType::Unknown {
        lost.push(UnmappedField::DeviceType);
    }
    if descriptor.client_package_name().is_some() {
        lost.push(UnmappedField::ClientPackageName);
    }
    if descriptor.is_dynamic_group_route() || !descriptor.group_member_ids().is_empty() {
        lost.push(UnmappedField::DynamicGroup);
    }
    if descriptor
        .control_filters()
        .iter()
        .any(|f| !f.actions().is_empty())
    {
        lost.push(UnmappedField::FilterActions);
    }
    if !descriptor.is_enabled() {
        lost.push(UnmappedField::Enabled);
    }
    if descriptor.can_disconnect() {
        lost.push(UnmappedField::CanDisconnect);
    }
    lost
}

/// Convert a descriptor into a native route
///
/// Identity, display, state, volume and extras are copied; control filters
/// are flattened into a feature set. If that set is empty,
/// [`FEATURE_EMPTY`] is added so the platform accepts the route.
#[must_use]
pub fn descriptor_to_native(descriptor: Option<&RouteDescriptor>) -> Option<NativeRoute> {
    let descriptor = descriptor?;

    let mut builder = NativeRoute::builder(descriptor.id(), descriptor.name())
        .description(descriptor.description().map(str::to_owned))
        .icon_uri(descriptor.icon_uri().cloned())
        .connection_state(descriptor.connection_state())
        .volume_handling(descriptor.volume_handling())
        .volume(descriptor.volume())
        .volume_max(descriptor.volume_max())
        .add_features(vocabulary::filters_to_features(descriptor.control_filters()))
        .extras(descriptor.extras().clone());

    if builder.has_no_features() {
        trace!(route_id = %descriptor.id(), "No features, adding empty placeholder");
        builder = builder.add_feature(FEATURE_EMPTY);
    }

    // Descriptor invariants cover id, name and volume; features are non-empty here
    Some(builder.assemble())
}

/// Convert a native route back into a descriptor
///
/// `enabled` is always `true` and `can_disconnect` always `false`. The
/// description and icon are only set when the native route has them.
#[must_use]
pub fn native_to_descriptor(route: Option<&NativeRoute>) -> Option<RouteDescriptor> {
    let route = route?;

    let mut builder = RouteDescriptor::builder(route.id(), route.name())
        .add_control_filters(vocabulary::features_to_filters(Some(route.features())))
        .connection_state(route.connection_state())
        .volume_handling(route.volume_handling())
        .volume_max(route.volume_max())
        .volume(route.volume())
        .extras(route.extras().clone())
        .enabled(true)
        .can_disconnect(false);

    if let Some(description) = route.description() {
        builder = builder.description(description);
    }
    if let Some(icon_uri) = route.icon_uri() {
        builder = builder.icon_uri(icon_uri.clone());
    }

    // Native route invariants cover id, name and volume
    Some(builder.assemble())
}

/// Convert a discovery request into a native discovery preference
///
/// Absent and invalid requests give [`DiscoveryPreference::empty`]. Otherwise
/// every selector category is mapped in order, duplicates included.
#[must_use]
pub fn to_discovery_preference(request: Option<&DiscoveryRequest>) -> DiscoveryPreference {
    let Some(request) = request.filter(|r| r.is_valid()) else {
        return DiscoveryPreference::empty();
    };

    let features = request
        .selector()
        .control_categories()
        .iter()
        .map(|c| vocabulary::category_to_feature(c).to_owned())
        .collect();
    DiscoveryPreference::new(features, request.is_active_scan())
}

/// Configured front end to the conversion functions
///
/// Adds logging around the free functions in this module; the conversions
/// themselves are identical.
#[derive(Debug, Clone, Default)]
pub struct RouteTranslator {
    config: TranslatorConfig,
}

impl RouteTranslator {
    /// Create a translator with the given config
    #[must_use]
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// See [`descriptor_to_native`]
    #[must_use]
    pub fn to_native(&self, descriptor: Option<&RouteDescriptor>) -> Option<NativeRoute> {
        if let Some(descriptor) = descriptor {
            self.report_lossy(descriptor);
        }
        let route = descriptor_to_native(descriptor);
        if self.config.log_conversions {
            if let Some(route) = &route {
                debug!(
                    route_id = %route.id(),
                    features = route.features().len(),
                    "Converted descriptor to native route"
                );
            }
        }
        route
    }

    /// See [`native_to_descriptor`]
    #[must_use]
    pub fn to_descriptor(&self, route: Option<&NativeRoute>) -> Option<RouteDescriptor> {
        let descriptor = native_to_descriptor(route);
        if self.config.log_conversions {
            if let Some(descriptor) = &descriptor {
                debug!(
                    route_id = %descriptor.id(),
                    filters = descriptor.control_filters().len(),
                    "Converted native route to descriptor"
                );
            }
        }
        descriptor
    }

    /// See [`to_discovery_preference`]
    #[must_use]
    pub fn to_preference(&self, request: Option<&DiscoveryRequest>) -> DiscoveryPreference {
        let preference = to_discovery_preference(request);
        // A valid selector with categories never maps to an empty preference
        if let Some(request) = request.filter(|r| !r.selector().is_empty()) {
            if preference.is_empty() {
                debug!(
                    categories = request.selector().control_categories().len(),
                    "Invalid discovery request, using empty preference"
                );
            }
        }
        if self.config.log_conversions {
            debug!(
                features = preference.preferred_features().len(),
                active_scan = preference.should_perform_active_scan(),
                "Converted discovery request"
            );
        }
        preference
    }

    fn report_lossy(&self, descriptor: &RouteDescriptor) {
        let lost = unmapped_fields(descriptor);
        if lost.is_empty() {
            return;
        }
        let fields = lost
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        if self.config.warn_on_lossy {
            warn!(route_id = %descriptor.id(), %fields, "Descriptor fields not carried by native route");
        } else {
            debug!(route_id = %descriptor.id(), %fields, "Descriptor fields not carried by native route");
        }
    }
}

#[cfg(test)]
mod tests;
