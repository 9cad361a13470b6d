//! Protocol core: wire constants, message kinds, codecs
//!
//! Everything in this module is a pure function over byte sequences. The
//! host-facing routing and event delivery live in [`crate::gateway`].

mod command;
mod error;
mod feature;
mod report;
mod types;
pub mod wire;

pub use command::{TaskCommand, encode_capability_query};
pub use error::{Error, Result};
pub use feature::{FeatureAnnouncement, TaskDescriptor, decode_feature_announcement};
pub use report::{TaskReport, decode_task_report};
pub use types::{MessageKind, WireMessage};

/// Transport-level type value shared by every message of this protocol.
///
/// Packets carrying any other tag belong to other protocols on the same
/// transport and are ignored.
pub const SESSION_TAG: u8 = 10;

/// Delimiter between tokens in a feature announcement's text section
/// (carriage return).
pub const TOKEN_DELIMITER: u8 = 0x0D;

/// Wire width of a device identifier in bytes.
pub const DEVICE_ID_WIDTH: usize = 2;

/// Largest value any single-byte count field can declare.
pub const MAX_COUNT: usize = 255;
