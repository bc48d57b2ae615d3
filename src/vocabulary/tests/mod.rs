
use super::*;
use crate::types::ControlFilter;

#[test]
fn test_well_known_category_to_feature() {
    assert_eq!(category_to_feature(category::LIVE_AUDIO), feature::LIVE_AUDIO);
    assert_eq!(category_to_feature(category::LIVE_VIDEO), feature::LIVE_VIDEO);
    assert_eq!(
        category_to_feature(category::REMOTE_PLAYBACK),
        feature::REMOTE_PLAYBACK
    );
}

#[test]
fn test_well_known_feature_to_category() {
    assert_eq!(feature_to_category(feature::LIVE_AUDIO), category::LIVE_AUDIO);
    assert_eq!(feature_to_category(feature::LIVE_VIDEO), category::LIVE_VIDEO);
    assert_eq!(
        feature_to_category(feature::REMOTE_PLAYBACK),
        category::REMOTE_PLAYBACK
    );
}

#[test]
fn test_well_known_round_trip() {
    for cap in WellKnownCapability::ALL {
        assert_eq!(feature_to_category(category_to_feature(cap.category())), cap.category());
        assert_eq!(category_to_feature(feature_to_category(cap.feature())), cap.feature());
        assert_eq!(WellKnownCapability::from_category(cap.category()), Some(cap));
        assert_eq!(WellKnownCapability::from_feature(cap.feature()), Some(cap));
    }
}

#[test]
fn test_custom_strings_pass_through() {
    assert_eq!(category_to_feature("com.example.CUSTOM"), "com.example.CUSTOM");
    assert_eq!(feature_to_category("com.example.CUSTOM"), "com.example.CUSTOM");
    assert_eq!(category_to_feature(""), "");
    assert!(WellKnownCapability::from_category("custom-x").is_none());
}

#[test]
fn test_category_is_not_a_feature() {
    // A category string fed to the feature side is not recognized there
    assert_eq!(feature_to_category(category::LIVE_AUDIO), category::LIVE_AUDIO);
    assert_eq!(category_to_feature(feature::LIVE_AUDIO), feature::LIVE_AUDIO);
}

#[test]
fn test_empty_sentinel() {
    assert!(is_empty_sentinel(FEATURE_EMPTY));
    assert!(!is_empty_sentinel(feature::LIVE_AUDIO));
    assert_eq!(feature_to_category(FEATURE_EMPTY), FEATURE_EMPTY);
}

#[test]
fn test_filters_to_features_deduplicates() {
    let filters = vec![
        ControlFilter::from_categories([category::LIVE_AUDIO, "custom-x"]),
        ControlFilter::with_category(category::LIVE_AUDIO),
    ];

    let features = filters_to_features(&filters);

    assert_eq!(features.len(), 2);
    assert!(features.contains(feature::LIVE_AUDIO));
    assert!(features.contains("custom-x"));
}

#[test]
fn test_filters_to_features_empty() {
    assert!(filters_to_features(&[]).is_empty());
    assert!(filters_to_features(&[ControlFilter::new()]).is_empty());
}

#[test]
fn test_filters_to_features_ignores_actions() {
    let filter = ControlFilter::with_category(category::REMOTE_PLAYBACK)
        .with_action("android.media.intent.action.PLAY");

    let features = filters_to_features(&[filter]);

    assert_eq!(features.len(), 1);
    assert!(features.contains(feature::REMOTE_PLAYBACK));
}

#[test]
fn test_features_to_filters_none_is_empty() {
    let filters = features_to_filters(None::<Vec<String>>);
    assert!(filters.is_empty());
}

#[test]
fn test_features_to_filters_order_and_dedup() {
    let features = [
        "custom-y",
        feature::LIVE_VIDEO,
        "custom-y",
        feature::LIVE_AUDIO,
    ];

    let filters = features_to_filters(Some(features));

    let categories: Vec<&[String]> = filters.iter().map(ControlFilter::categories).collect();
    assert_eq!(
        categories,
        vec![
            &["custom-y".to_string()][..],
            &[category::LIVE_VIDEO.to_string()][..],
            &[category::LIVE_AUDIO.to_string()][..],
        ]
    );
    assert!(filters.iter().all(|f| f.actions().is_empty()));
}
