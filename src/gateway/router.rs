//! Packet router: classify inbound payloads and delegate to the decoders

use tracing::{debug, trace};

use super::Event;
use crate::protocol::{
    Error, MessageKind, Result, SESSION_TAG, decode_feature_announcement, decode_task_report,
};

/// Route one inbound packet.
///
/// - A `tag` other than [`SESSION_TAG`] means the packet belongs to another
///   protocol sharing the transport: `Ok(None)`, not an error.
/// - Discriminators for the two device-to-controller kinds delegate to the
///   matching decoder and yield an [`Event`].
/// - Any other discriminator (including the outbound kinds, which devices
///   never echo) is dropped with a debug log: `Ok(None)`.
///
/// Decode failures surface as `Err` for the caller's diagnostics boundary.
/// The router holds no state, so a malformed packet cannot affect the next.
pub fn route(tag: u8, payload: &[u8]) -> Result<Option<Event>> {
    if tag != SESSION_TAG {
        return Ok(None);
    }

    let Some(&discriminator) = payload.first() else {
        return Err(Error::Truncated { needed: 1, got: 0 });
    };

    let event = match MessageKind::from_u8(discriminator) {
        Some(MessageKind::TaskReport) => {
            Event::TaskReportReceived(decode_task_report(&payload[1..])?)
        }
        Some(MessageKind::FeatureAnnouncement) => {
            Event::FeatureAnnounced(decode_feature_announcement(&payload[1..])?)
        }
        _ => {
            debug!(discriminator, "unrecognized inner message kind, dropping");
            return Ok(None);
        }
    };

    trace!(%event, "routed inbound packet");
    Ok(Some(event))
}
