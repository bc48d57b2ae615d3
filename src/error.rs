use thiserror::Error;

/// Errors raised while building route records
///
/// Conversions between the two route representations never fail; these
/// errors only come out of the record builders, where a caller supplied
/// values the record cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A required field was empty
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Volume exceeds the route's maximum volume
    #[error("volume {volume} out of range (max: {volume_max})")]
    VolumeOutOfRange {
        /// The requested volume
        volume: u32,
        /// The maximum volume of the route
        volume_max: u32,
    },

    /// A native route must advertise at least one feature
    #[error("native route {route_id} has no features")]
    EmptyFeatures {
        /// The ID of the offending route
        route_id: String,
    },

    /// Unknown platform connection state constant
    #[error("invalid connection state: {0}")]
    InvalidConnectionState(i32),

    /// Unknown platform volume handling constant
    #[error("invalid volume handling: {0}")]
    InvalidVolumeHandling(i32),
}

impl RouteError {
    /// Shorthand for a [`RouteError::MissingField`]
    #[must_use]
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Check if this error comes from an out-of-range platform constant
    #[must_use]
    pub fn is_invalid_constant(&self) -> bool {
        matches!(
            self,
            Self::InvalidConnectionState(_) | Self::InvalidVolumeHandling(_)
        )
    }
}

/// Result type alias for route record construction
pub type Result<T> = std::result::Result<T, RouteError>;
