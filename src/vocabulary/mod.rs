//! Capability vocabulary shared by descriptors and native routes
//!
//! Descriptors describe capabilities as control filters holding category
//! strings; native routes use a flat set of feature strings. Three
//! well-known categories map to platform features. Every other string is
//! passed through unchanged in both directions, so provider-defined
//! capabilities survive translation.

use std::collections::{BTreeSet, HashSet};

use crate::types::ControlFilter;

/// Descriptor-side control category constants
pub mod category {
    /// Route can play live audio
    pub const LIVE_AUDIO: &str = "android.media.intent.category.LIVE_AUDIO";
    /// Route can play live video
    pub const LIVE_VIDEO: &str = "android.media.intent.category.LIVE_VIDEO";
    /// Route supports remote playback requests
    pub const REMOTE_PLAYBACK: &str = "android.media.intent.category.REMOTE_PLAYBACK";
}

/// Native-side route feature constants
pub mod feature {
    /// Route can play live audio
    pub const LIVE_AUDIO: &str = "android.media.route.feature.LIVE_AUDIO";
    /// Route can play live video
    pub const LIVE_VIDEO: &str = "android.media.route.feature.LIVE_VIDEO";
    /// Route supports remote playback requests
    pub const REMOTE_PLAYBACK: &str = "android.media.route.feature.REMOTE_PLAYBACK";
}

/// Placeholder feature for routes without any capability.
///
/// The platform rejects routes with an empty feature set, so a descriptor
/// whose filters flatten to nothing is given this feature instead. It does
/// not describe a capability; consumers reading real capabilities must skip
/// it (see [`is_empty_sentinel`]).
pub const FEATURE_EMPTY: &str = "android.media.route.feature.EMPTY";

/// Check if a feature is the [`FEATURE_EMPTY`] placeholder
#[must_use]
pub fn is_empty_sentinel(feature: &str) -> bool {
    feature == FEATURE_EMPTY
}

/// The capabilities with a dedicated name on both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellKnownCapability {
    /// Live audio
    LiveAudio,
    /// Live video
    LiveVideo,
    /// Remote playback
    RemotePlayback,
}

impl WellKnownCapability {
    /// All well-known capabilities
    pub const ALL: [Self; 3] = [Self::LiveAudio, Self::LiveVideo, Self::RemotePlayback];

    /// Descriptor-side category string
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::LiveAudio => category::LIVE_AUDIO,
            Self::LiveVideo => category::LIVE_VIDEO,
            Self::RemotePlayback => category::REMOTE_PLAYBACK,
        }
    }

    /// Native-side feature string
    #[must_use]
    pub fn feature(self) -> &'static str {
        match self {
            Self::LiveAudio => feature::LIVE_AUDIO,
            Self::LiveVideo => feature::LIVE_VIDEO,
            Self::RemotePlayback => feature::REMOTE_PLAYBACK,
        }
    }

    /// Look up a capability by its category string
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.category() == category)
    }

    /// Look up a capability by its feature string
    #[must_use]
    pub fn from_feature(feature: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.feature() == feature)
    }
}

/// Map a control category to its route feature
#[must_use]
pub fn category_to_feature(category: &str) -> &str {
    WellKnownCapability::from_category(category).map_or(category, |c| c.feature())
}

/// Map a route feature to its control category
#[must_use]
pub fn feature_to_category(feature: &str) -> &str {
    WellKnownCapability::from_feature(feature).map_or(feature, |c| c.category())
}

/// Flatten control filters into a deduplicated feature set
///
/// The result may be empty; the route converter handles that case.
#[must_use]
pub fn filters_to_features(filters: &[ControlFilter]) -> BTreeSet<String> {
    filters
        .iter()
        .flat_map(ControlFilter::categories)
        .map(|c| category_to_feature(c).to_owned())
        .collect()
}

/// Expand features into one single-category control filter each
///
/// Duplicate features are dropped, keeping first-seen order. `None` yields
/// an empty list. Actions cannot be recovered from a feature, so the
/// filters never carry any.
#[must_use]
pub fn features_to_filters<I>(features: Option<I>) -> Vec<ControlFilter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let Some(features) = features else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    features
        .into_iter()
        .filter(|f| seen.insert(f.as_ref().to_owned()))
        .map(|f| ControlFilter::with_category(feature_to_category(f.as_ref())))
        .collect()
}

#[cfg(test)]
mod tests;
