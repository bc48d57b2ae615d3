//! Core types module

mod config;
mod descriptor;
mod discovery;
mod filter;
mod native;
mod state;


pub use config::{TranslatorConfig, TranslatorConfigBuilder};
pub use descriptor::{RouteDescriptor, RouteDescriptorBuilder};
pub use discovery::{DiscoveryPreference, DiscoveryRequest, RouteSelector};
pub use filter::ControlFilter;
pub use native::{NativeRoute, NativeRouteBuilder};
pub use state::{ConnectionState, DeviceType, VolumeHandling};

/// Opaque key/value bag carried unchanged across conversions
pub type Extras = serde_json::Map<String, serde_json::Value>;
