//! fieldlink - Wire-protocol codec for controlling field devices (robots/sensors)
//!
//! This library implements the controller side of a fixed-shape binary protocol:
//! it builds task-dispatch and capability-query payloads for an opaque packet
//! transport, and classifies and decodes the two message kinds devices send
//! back (task reports and capability announcements).
//!
//! # Quick Start
//!
//! ```rust
//! use fieldlink::{SESSION_TAG, TaskCommand, route};
//!
//! // Build an outbound command
//! let cmd = TaskCommand::new(7, "go", vec![1, 2]);
//! let wire = cmd.encode()?;
//! assert_eq!(wire.tag, SESSION_TAG);
//!
//! // Route an inbound packet (a task report from device 7)
//! let packet = [2, 0, 7, 1, 42, b'g', b'o'];
//! let event = route(SESSION_TAG, &packet)?;
//! assert!(event.is_some());
//! # Ok::<(), fieldlink::Error>(())
//! ```
//!
//! # Design
//!
//! - **Pure codecs** - every encode/decode call operates only on its inputs
//! - **Explicit failures** - malformed input is a reported error, never a
//!   truncated or defaulted value that looks like real data
//! - **Stateless routing** - a bad packet never affects the next one

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod gateway;
pub mod protocol;

pub use gateway::{Event, Gateway, Transport, route};
pub use protocol::{
    Error, FeatureAnnouncement, MessageKind, Result, SESSION_TAG, TOKEN_DELIMITER, TaskCommand,
    TaskDescriptor, TaskReport, WireMessage, encode_capability_query,
};

/// Protocol revision implemented by this crate
pub const VERSION: &str = "1.0";
