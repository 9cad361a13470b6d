//! Message kinds and the transport exchange unit

use std::fmt;

use bytes::Bytes;

/// Inner message kinds, identified by the first payload byte.
///
/// `TaskCommand` and `CapabilityQuery` flow controller-to-device;
/// `TaskReport` and `FeatureAnnouncement` flow device-to-controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MessageKind {
    /// Dispatch a task to a device
    TaskCommand = 0,
    /// Ask every device to announce its capabilities
    CapabilityQuery = 1,
    /// A device reports a task execution
    TaskReport = 2,
    /// A device announces the tasks it supports
    FeatureAnnouncement = 3,
}

impl MessageKind {
    /// Convert from a discriminator byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::TaskCommand),
            1 => Some(Self::CapabilityQuery),
            2 => Some(Self::TaskReport),
            3 => Some(Self::FeatureAnnouncement),
            _ => None,
        }
    }

    /// Convert to the discriminator byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this kind is sent by devices (inbound at the controller)
    #[must_use]
    pub const fn is_inbound(self) -> bool {
        matches!(self, Self::TaskReport | Self::FeatureAnnouncement)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TaskCommand => "TaskCommand",
            Self::CapabilityQuery => "CapabilityQuery",
            Self::TaskReport => "TaskReport",
            Self::FeatureAnnouncement => "FeatureAnnouncement",
        };
        write!(f, "{name}")
    }
}

/// The unit exchanged with the external transport: an opaque payload plus
/// the transport-level type tag it travels under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireMessage {
    /// Transport-level type tag
    pub tag: u8,
    /// Raw payload bytes, discriminator first
    pub payload: Bytes,
}

impl WireMessage {
    /// Wrap a finished payload under the given tag
    #[must_use]
    pub fn new(tag: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            tag,
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in [
            MessageKind::TaskCommand,
            MessageKind::CapabilityQuery,
            MessageKind::TaskReport,
            MessageKind::FeatureAnnouncement,
        ] {
            assert_eq!(MessageKind::from_u8(kind.as_u8()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_discriminator() {
        assert_eq!(MessageKind::from_u8(4), None);
        assert_eq!(MessageKind::from_u8(99), None);
    }

    #[test]
    fn test_direction() {
        assert!(MessageKind::TaskReport.is_inbound());
        assert!(MessageKind::FeatureAnnouncement.is_inbound());
        assert!(!MessageKind::TaskCommand.is_inbound());
        assert!(!MessageKind::CapabilityQuery.is_inbound());
    }
}
