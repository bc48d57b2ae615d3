use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Connection state of a route
///
/// Discriminants match the platform's integer constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ConnectionState {
    /// Not connected
    #[default]
    Disconnected = 0,
    /// Connection in progress
    Connecting = 1,
    /// Connected and ready
    Connected = 2,
}

impl ConnectionState {
    /// Platform integer constant for this state
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ConnectionState {
    type Error = RouteError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disconnected),
            1 => Ok(Self::Connecting),
            2 => Ok(Self::Connected),
            other => Err(RouteError::InvalidConnectionState(other)),
        }
    }
}

/// How a route's volume can be changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum VolumeHandling {
    /// Volume is fixed and cannot be changed
    #[default]
    Fixed = 0,
    /// Volume can be changed
    Variable = 1,
}

impl VolumeHandling {
    /// Platform integer constant for this handling mode
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for VolumeHandling {
    type Error = RouteError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Fixed),
            1 => Ok(Self::Variable),
            other => Err(RouteError::InvalidVolumeHandling(other)),
        }
    }
}

/// Kind of physical device behind a route
///
/// Only known on the descriptor side; native routes never carry it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Unknown device
    #[default]
    Unknown,
    /// Television or other display
    Tv,
    /// Remote speaker
    Speaker,
    /// Bluetooth audio device
    Bluetooth,
}
