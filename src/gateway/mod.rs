//! Host-facing layer: packet routing and event publication
//!
//! The [`Gateway`] owns the outbound transport handle and a channel sender
//! for decoded events. The codecs themselves know nothing about
//! subscriptions; hosts read events off the paired receiver and fan them
//! out however they like.

mod event;
mod router;

pub use event::Event;
pub use router::route;

use std::sync::mpsc::{self, Receiver, SendError, Sender};

use tracing::{debug, warn};

use crate::protocol::{Result, SESSION_TAG, TaskCommand, encode_capability_query};

/// Outbound packet transport consumed by the gateway.
///
/// Framing, retransmission, and physical delivery are the implementor's
/// concern; the gateway only hands over a finished payload and its tag.
pub trait Transport {
    /// Send one packet with the given transport-level type tag.
    fn send(&mut self, tag: u8, payload: &[u8]);
}

/// Controller endpoint for one device protocol session.
///
/// Encodes and sends commands, routes inbound packets, and publishes
/// decoded events. Holds no protocol state between calls; a malformed
/// packet is logged and dropped without affecting the next one.
pub struct Gateway<T: Transport> {
    transport: T,
    events: Sender<Event>,
}

impl<T: Transport> Gateway<T> {
    /// Create a gateway over `transport`, returning the receiver that
    /// yields decoded events.
    pub fn new(transport: T) -> (Self, Receiver<Event>) {
        let (events, receiver) = mpsc::channel();
        (Self { transport, events }, receiver)
    }

    /// Encode `command` and send it.
    ///
    /// All-or-nothing: on any encode error nothing is sent and the error is
    /// returned to the caller.
    pub fn dispatch_task(&mut self, command: &TaskCommand) -> Result<()> {
        let wire = command.encode()?;
        self.transport.send(wire.tag, &wire.payload);
        Ok(())
    }

    /// Ask every device on the transport to announce its capabilities.
    pub fn request_capabilities(&mut self) {
        let wire = encode_capability_query();
        self.transport.send(wire.tag, &wire.payload);
    }

    /// Handle one inbound packet from the transport.
    ///
    /// Packets for other protocols and unrecognized inner kinds are dropped;
    /// decode failures are logged at the diagnostics boundary and dropped.
    /// Never panics and never publishes a partial value.
    pub fn handle_packet(&mut self, tag: u8, payload: &[u8]) {
        match route(tag, payload) {
            Ok(Some(event)) => {
                if let Err(SendError(event)) = self.events.send(event) {
                    debug!(%event, "event receiver dropped, discarding");
                }
            }
            Ok(None) => {}
            Err(error) => {
                warn!(tag, len = payload.len(), %error, "dropping malformed packet");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CapturingTransport {
        sent: Vec<(u8, Vec<u8>)>,
    }

    impl Transport for CapturingTransport {
        fn send(&mut self, tag: u8, payload: &[u8]) {
            self.sent.push((tag, payload.to_vec()));
        }
    }

    #[test]
    fn test_dispatch_sends_encoded_command() {
        let (mut gateway, _events) = Gateway::new(CapturingTransport::default());
        let cmd = TaskCommand::new(7, "go", vec![1, 2]);
        gateway.dispatch_task(&cmd).unwrap();

        assert_eq!(gateway.transport.sent.len(), 1);
        let (tag, payload) = &gateway.transport.sent[0];
        assert_eq!(*tag, SESSION_TAG);
        assert_eq!(payload, &[0, 0, 7, 2, 1, 2, b'g', b'o']);
    }

    #[test]
    fn test_dispatch_failure_sends_nothing() {
        let (mut gateway, _events) = Gateway::new(CapturingTransport::default());
        let cmd = TaskCommand::new(65536, "go", vec![]);

        assert!(gateway.dispatch_task(&cmd).is_err());
        assert!(gateway.transport.sent.is_empty());
    }

    #[test]
    fn test_request_capabilities() {
        let (mut gateway, _events) = Gateway::new(CapturingTransport::default());
        gateway.request_capabilities();

        assert_eq!(gateway.transport.sent, vec![(SESSION_TAG, vec![1])]);
    }

    #[test]
    fn test_handle_packet_publishes_event() {
        let (mut gateway, events) = Gateway::new(CapturingTransport::default());
        gateway.handle_packet(SESSION_TAG, &[2, 0, 7, 1, 42, b'g', b'o']);

        match events.try_recv().unwrap() {
            Event::TaskReportReceived(report) => {
                assert_eq!(report.device_id, 7);
                assert_eq!(report.parameters, vec![42]);
                assert_eq!(report.task_name, "go");
            }
            other => panic!("unexpected event: {other}"),
        }
    }

    #[test]
    fn test_malformed_packet_does_not_poison_gateway() {
        let (mut gateway, events) = Gateway::new(CapturingTransport::default());

        // Truncated report, then a valid one.
        gateway.handle_packet(SESSION_TAG, &[2, 0]);
        gateway.handle_packet(SESSION_TAG, &[2, 0, 9, 0, b'o', b'k']);

        match events.try_recv().unwrap() {
            Event::TaskReportReceived(report) => {
                assert_eq!(report.device_id, 9);
                assert_eq!(report.task_name, "ok");
            }
            other => panic!("unexpected event: {other}"),
        }
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_tolerated() {
        let (mut gateway, events) = Gateway::new(CapturingTransport::default());
        drop(events);

        gateway.handle_packet(SESSION_TAG, &[2, 0, 7, 0, b'g', b'o']);
    }
}
