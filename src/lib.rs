//! # mediaroute-bridge
//!
//! Translation between the platform media-routing service's routes and the
//! platform-independent route descriptors used by an application router.
//!
//! ## Features
//!
//! - Descriptor to native route conversion (with the empty-feature workaround)
//! - Native route to descriptor conversion (with fixed defaults)
//! - Control category and route feature vocabulary mapping
//! - Discovery request to discovery preference conversion
//!
//! ## Example
//!
//! ```rust
//! use mediaroute_bridge::vocabulary::{category, feature};
//! use mediaroute_bridge::{ControlFilter, RouteDescriptor, descriptor_to_native};
//!
//! # fn example() -> Result<(), mediaroute_bridge::RouteError> {
//! let descriptor = RouteDescriptor::builder("speaker-1", "Kitchen")
//!     .add_control_filter(ControlFilter::with_category(category::LIVE_AUDIO))
//!     .build()?;
//!
//! let route = descriptor_to_native(Some(&descriptor));
//! assert!(route.is_some_and(|r| r.has_feature(feature::LIVE_AUDIO)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! - **Types**: `RouteDescriptor`, `NativeRoute` and discovery records
//! - **Vocabulary**: category/feature mapping shared by every conversion
//! - **Translate**: the conversion functions and `RouteTranslator`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// Conversion functions
pub mod translate;
/// Core types
pub mod types;
pub mod vocabulary;

// Re-exports
pub use error::RouteError;
pub use translate::{
    RouteTranslator, UnmappedField, descriptor_to_native, native_to_descriptor,
    to_discovery_preference, unmapped_fields,
};
pub use types::{
    ConnectionState, ControlFilter, DeviceType, DiscoveryPreference, DiscoveryRequest, Extras,
    NativeRoute, RouteDescriptor, RouteSelector, TranslatorConfig, VolumeHandling,
};
pub use vocabulary::{FEATURE_EMPTY, features_to_filters, filters_to_features};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        ControlFilter, DiscoveryPreference, DiscoveryRequest, NativeRoute, RouteDescriptor,
        RouteError, RouteSelector, RouteTranslator, descriptor_to_native, native_to_descriptor,
        to_discovery_preference,
    };
}
