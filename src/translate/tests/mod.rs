
use super::*;
use crate::types::{
    ConnectionState, ControlFilter, DeviceType, Extras, NativeRoute, RouteSelector,
    VolumeHandling,
};
use crate::vocabulary::{category, feature};

fn speaker_descriptor() -> RouteDescriptor {
    let mut extras = Extras::new();
    extras.insert("vendor".to_string(), serde_json::json!("acme"));

    RouteDescriptor::builder("speaker-1", "Kitchen Speaker")
        .description("Upstairs")
        .icon_uri("https://example.com/speaker.png".parse().unwrap())
        .connection_state(ConnectionState::Connected)
        .volume_handling(VolumeHandling::Variable)
        .volume_max(20)
        .volume(7)
        .add_control_filter(ControlFilter::from_categories([
            category::LIVE_AUDIO,
            "com.example.CUSTOM",
        ]))
        .add_control_filter(ControlFilter::with_category(category::LIVE_AUDIO))
        .extras(extras)
        .build()
        .unwrap()
}

// --- descriptor_to_native ---

#[test]
fn test_descriptor_to_native_none() {
    assert!(descriptor_to_native(None).is_none());
}

#[test]
fn test_descriptor_to_native_copies_fields() {
    let descriptor = speaker_descriptor();
    let route = descriptor_to_native(Some(&descriptor)).unwrap();

    assert_eq!(route.id(), "speaker-1");
    assert_eq!(route.name(), "Kitchen Speaker");
    assert_eq!(route.description(), Some("Upstairs"));
    assert_eq!(
        route.icon_uri().map(url::Url::as_str),
        Some("https://example.com/speaker.png")
    );
    assert_eq!(route.connection_state(), ConnectionState::Connected);
    assert_eq!(route.volume_handling(), VolumeHandling::Variable);
    assert_eq!(route.volume(), 7);
    assert_eq!(route.volume_max(), 20);
    assert_eq!(route.extras(), descriptor.extras());
}

#[test]
fn test_descriptor_to_native_flattens_filters() {
    let route = descriptor_to_native(Some(&speaker_descriptor())).unwrap();

    assert_eq!(route.features().len(), 2);
    assert!(route.has_feature(feature::LIVE_AUDIO));
    assert!(route.has_feature("com.example.CUSTOM"));
    assert!(!route.has_feature(FEATURE_EMPTY));
}

#[test]
fn test_descriptor_without_filters_gets_empty_feature() {
    let descriptor = RouteDescriptor::builder("bare", "Bare").build().unwrap();
    let route = descriptor_to_native(Some(&descriptor)).unwrap();

    assert_eq!(route.features().len(), 1);
    assert!(route.has_feature(FEATURE_EMPTY));
    assert_eq!(route.real_features().count(), 0);
}

#[test]
fn test_descriptor_with_categoryless_filter_gets_empty_feature() {
    let descriptor = RouteDescriptor::builder("bare", "Bare")
        .add_control_filter(ControlFilter::new().with_action("play"))
        .build()
        .unwrap();
    let route = descriptor_to_native(Some(&descriptor)).unwrap();

    assert_eq!(
        route.features().iter().map(String::as_str).collect::<Vec<_>>(),
        vec![FEATURE_EMPTY]
    );
}

#[test]
fn test_converted_route_passes_native_validation() {
    let route = descriptor_to_native(Some(&speaker_descriptor())).unwrap();

    let rebuilt = NativeRoute::builder(route.id(), route.name())
        .description(route.description().map(str::to_owned))
        .icon_uri(route.icon_uri().cloned())
        .connection_state(route.connection_state())
        .volume_handling(route.volume_handling())
        .volume_max(route.volume_max())
        .volume(route.volume())
        .add_features(route.features().iter().cloned())
        .extras(route.extras().clone())
        .build()
        .unwrap();

    assert_eq!(rebuilt, route);
}

// --- native_to_descriptor ---

#[test]
fn test_native_to_descriptor_none() {
    assert!(native_to_descriptor(None).is_none());
}

#[test]
fn test_native_to_descriptor_fields() {
    let route = NativeRoute::builder("tv-1", "Living Room TV")
        .connection_state(ConnectionState::Connecting)
        .volume_handling(VolumeHandling::Variable)
        .volume_max(100)
        .volume(40)
        .add_features([feature::LIVE_VIDEO, "com.example.CUSTOM"])
        .build()
        .unwrap();

    let descriptor = native_to_descriptor(Some(&route)).unwrap();

    assert_eq!(descriptor.id(), "tv-1");
    assert_eq!(descriptor.name(), "Living Room TV");
    assert_eq!(descriptor.connection_state(), ConnectionState::Connecting);
    assert_eq!(descriptor.volume_handling(), VolumeHandling::Variable);
    assert_eq!(descriptor.volume(), 40);
    assert_eq!(descriptor.volume_max(), 100);
    assert!(descriptor.is_enabled());
    assert!(!descriptor.can_disconnect());
    assert!(descriptor.description().is_none());
    assert!(descriptor.icon_uri().is_none());
    assert_eq!(descriptor.device_type(), DeviceType::Unknown);
    assert!(!descriptor.is_dynamic_group_route());
    assert!(descriptor.group_member_ids().is_empty());

    let filters = descriptor.control_filters();
    assert_eq!(filters.len(), 2);
    assert!(filters.iter().all(|f| f.count_categories() == 1));
    assert!(filters.iter().any(|f| f.has_category(category::LIVE_VIDEO)));
    assert!(filters.iter().any(|f| f.has_category("com.example.CUSTOM")));
}

#[test]
fn test_native_to_descriptor_optional_display_fields() {
    let route = NativeRoute::builder("tv-1", "TV")
        .description(Some("Den".to_string()))
        .icon_uri(Some("content://icons/tv".parse().unwrap()))
        .add_feature(feature::LIVE_VIDEO)
        .build()
        .unwrap();

    let descriptor = native_to_descriptor(Some(&route)).unwrap();

    assert_eq!(descriptor.description(), Some("Den"));
    assert_eq!(
        descriptor.icon_uri().map(url::Url::as_str),
        Some("content://icons/tv")
    );
}

#[test]
fn test_native_empty_feature_maps_to_passthrough_filter() {
    let descriptor = RouteDescriptor::builder("bare", "Bare").build().unwrap();
    let route = descriptor_to_native(Some(&descriptor)).unwrap();

    let back = native_to_descriptor(Some(&route)).unwrap();

    assert_eq!(back.control_filters().len(), 1);
    assert!(back.control_filters()[0].has_category(FEATURE_EMPTY));
}

// --- round trip ---

#[test]
fn test_round_trip_resets_enabled_and_can_disconnect() {
    let descriptor = RouteDescriptor::builder("r", "Route")
        .enabled(false)
        .can_disconnect(true)
        .build()
        .unwrap();

    let route = descriptor_to_native(Some(&descriptor)).unwrap();
    let back = native_to_descriptor(Some(&route)).unwrap();

    assert!(back.is_enabled());
    assert!(!back.can_disconnect());
    assert_ne!(back, descriptor);
}

#[test]
fn test_round_trip_keeps_identity_volume_and_extras() {
    let descriptor = speaker_descriptor();
    let back = native_to_descriptor(descriptor_to_native(Some(&descriptor)).as_ref()).unwrap();

    assert_eq!(back.id(), descriptor.id());
    assert_eq!(back.name(), descriptor.name());
    assert_eq!(back.description(), descriptor.description());
    assert_eq!(back.icon_uri(), descriptor.icon_uri());
    assert_eq!(back.volume(), descriptor.volume());
    assert_eq!(back.volume_max(), descriptor.volume_max());
    assert_eq!(back.extras(), descriptor.extras());
    // Two filters with three categories come back as two single-category filters
    assert_eq!(back.control_filters().len(), 2);
}

// --- unmapped_fields ---

#[test]
fn test_unmapped_fields_default_descriptor() {
    let descriptor = RouteDescriptor::builder("r", "Route").build().unwrap();
    assert!(unmapped_fields(&descriptor).is_empty());
}

#[test]
fn test_unmapped_fields_reports_everything_lost() {
    let descriptor = RouteDescriptor::builder("group", "Group")
        .device_type(DeviceType::Speaker)
        .client_package_name("com.example.player")
        .is_dynamic_group_route(true)
        .add_group_member_id("a")
        .add_control_filter(
            ControlFilter::with_category(category::REMOTE_PLAYBACK).with_action("play"),
        )
        .enabled(false)
        .can_disconnect(true)
        .build()
        .unwrap();

    assert_eq!(unmapped_fields(&descriptor), UnmappedField::ALL.to_vec());
}

#[test]
fn test_unmapped_field_display() {
    assert_eq!(UnmappedField::DynamicGroup.to_string(), "dynamic_group");
    assert_eq!(UnmappedField::FilterActions.as_str(), "filter_actions");
}

// --- to_discovery_preference ---

#[test]
fn test_discovery_preference_none() {
    let preference = to_discovery_preference(None);
    assert!(preference.preferred_features().is_empty());
    assert!(!preference.should_perform_active_scan());
}

#[test]
fn test_discovery_preference_invalid_request() {
    let request = DiscoveryRequest::new(RouteSelector::new([category::LIVE_AUDIO, " "]), true);
    assert!(!request.is_valid());

    assert_eq!(to_discovery_preference(Some(&request)), DiscoveryPreference::empty());
}

#[test]
fn test_discovery_preference_maps_in_order() {
    let request = DiscoveryRequest::new(
        RouteSelector::new([category::LIVE_VIDEO, category::REMOTE_PLAYBACK]),
        true,
    );

    let preference = to_discovery_preference(Some(&request));

    assert!(preference.should_perform_active_scan());
    assert_eq!(
        preference.preferred_features(),
        &[
            feature::LIVE_VIDEO.to_string(),
            feature::REMOTE_PLAYBACK.to_string()
        ]
    );
}

#[test]
fn test_discovery_preference_keeps_duplicates() {
    let request = DiscoveryRequest::new(
        RouteSelector::new([category::LIVE_AUDIO, "custom", category::LIVE_AUDIO]),
        false,
    );

    let preference = to_discovery_preference(Some(&request));

    assert!(!preference.should_perform_active_scan());
    assert_eq!(
        preference.preferred_features(),
        &[
            feature::LIVE_AUDIO.to_string(),
            "custom".to_string(),
            feature::LIVE_AUDIO.to_string()
        ]
    );
}

#[test]
fn test_discovery_preference_empty_selector_is_valid() {
    let request = DiscoveryRequest::new(RouteSelector::default(), true);

    let preference = to_discovery_preference(Some(&request));

    assert!(preference.is_empty());
    assert!(preference.should_perform_active_scan());
}

// --- RouteTranslator ---

#[test]
fn test_translator_matches_free_functions() {
    let translator = RouteTranslator::new(
        TranslatorConfig::builder()
            .warn_on_lossy(false)
            .log_conversions(true)
            .build(),
    );
    let descriptor = speaker_descriptor();

    let route = translator.to_native(Some(&descriptor));
    assert_eq!(route, descriptor_to_native(Some(&descriptor)));

    let back = translator.to_descriptor(route.as_ref());
    assert_eq!(back, native_to_descriptor(route.as_ref()));

    let request = DiscoveryRequest::new(RouteSelector::new([category::LIVE_AUDIO]), false);
    assert_eq!(
        translator.to_preference(Some(&request)),
        to_discovery_preference(Some(&request))
    );

    assert!(translator.to_native(None).is_none());
    assert!(translator.to_descriptor(None).is_none());
    assert!(translator.to_preference(None).is_empty());
}

#[test]
fn test_translator_default_config() {
    let translator = RouteTranslator::default();
    assert!(translator.config().warn_on_lossy);
    assert!(!translator.config().log_conversions);
}

#[test]
fn test_translator_preference_for_invalid_and_empty_requests() {
    let translator = RouteTranslator::default();

    let invalid = DiscoveryRequest::new(RouteSelector::new([category::LIVE_AUDIO, ""]), true);
    assert_eq!(translator.to_preference(Some(&invalid)), DiscoveryPreference::empty());

    let empty = DiscoveryRequest::new(RouteSelector::default(), true);
    let preference = translator.to_preference(Some(&empty));
    assert!(preference.is_empty());
    assert!(preference.should_perform_active_scan());
}
