//! Command encoder: task dispatch and capability query
//!
//! # Wire Format (task command payload)
//!
//! ```text
//! [kind=0 (1)] [device id (2, BE)] [param count (1)] [params (1 each)] [task name (rest)]
//! ```
//!
//! The task name carries no length prefix or terminator; the decoder on the
//! device recovers it as the remainder of the payload. Encoding is
//! all-or-nothing: any range failure means no bytes are produced.

use super::{DEVICE_ID_WIDTH, Error, MAX_COUNT, MessageKind, Result, SESSION_TAG, WireMessage, wire};

/// A task dispatch request for a single addressable device.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskCommand {
    /// Target device, wire range 0..=65535
    pub device_id: u32,
    /// ASCII task name
    pub task_name: String,
    /// Parameter values in order, wire range 0..=255 each
    pub parameters: Vec<u32>,
}

impl TaskCommand {
    /// Create a new task command
    pub fn new(device_id: u32, task_name: impl Into<String>, parameters: Vec<u32>) -> Self {
        Self {
            device_id,
            task_name: task_name.into(),
            parameters,
        }
    }

    /// Encode this command into a transport payload under [`SESSION_TAG`].
    ///
    /// # Errors
    ///
    /// - [`Error::DeviceIdOutOfRange`] if the device id needs more than 2 bytes
    /// - [`Error::TooManyParameters`] if there are more than 255 parameters
    /// - [`Error::ParameterOutOfRange`] if any parameter exceeds 255; values
    ///   are rejected rather than truncated to their low byte, so nothing
    ///   lossy ever reaches the wire
    pub fn encode(&self) -> Result<WireMessage> {
        let id_bytes = wire::encode_unsigned(u64::from(self.device_id), DEVICE_ID_WIDTH)
            .map_err(|_| Error::DeviceIdOutOfRange {
                device_id: self.device_id,
            })?;

        let count = self.parameters.len();
        if count > MAX_COUNT {
            return Err(Error::TooManyParameters { count });
        }

        let mut params = Vec::with_capacity(count);
        for (index, &value) in self.parameters.iter().enumerate() {
            if value > 255 {
                return Err(Error::ParameterOutOfRange { index, value });
            }
            params.push(value as u8);
        }

        let name_bytes = self.task_name.as_bytes();
        let mut payload = Vec::with_capacity(1 + DEVICE_ID_WIDTH + 1 + count + name_bytes.len());
        payload.push(MessageKind::TaskCommand.as_u8());
        payload.extend_from_slice(&id_bytes);
        payload.push(count as u8);
        payload.extend_from_slice(&params);
        payload.extend_from_slice(name_bytes);

        Ok(WireMessage::new(SESSION_TAG, payload))
    }
}

/// Encode a capability query: asks every device on the transport to announce
/// the tasks it supports.
///
/// Single discriminator byte, no fields. Always succeeds and is idempotent.
#[must_use]
pub fn encode_capability_query() -> WireMessage {
    WireMessage::new(SESSION_TAG, vec![MessageKind::CapabilityQuery.as_u8()])
}
