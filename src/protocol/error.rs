//! Protocol error types

use thiserror::Error;

/// Protocol codec errors
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric field does not fit its declared wire width
    #[error("value {value} does not fit in {width} byte(s)")]
    ValueTooWide {
        /// Value that was supposed to be encoded
        value: u64,
        /// Declared wire width in bytes
        width: usize,
    },

    /// Device identifier outside the 2-byte wire range
    #[error("device id {device_id} outside wire range 0..=65535")]
    DeviceIdOutOfRange {
        /// Offending device id
        device_id: u32,
    },

    /// More parameters than a single count byte can declare
    #[error("too many parameters: {count} (max 255)")]
    TooManyParameters {
        /// Number of parameters supplied
        count: usize,
    },

    /// Parameter value outside its 1-byte wire range
    #[error("parameter {index} is {value}, outside wire range 0..=255")]
    ParameterOutOfRange {
        /// Position of the offending parameter
        index: usize,
        /// Offending value
        value: u32,
    },

    /// Payload shorter than its declared structure requires
    ///
    /// Units are bytes, except for a feature announcement whose text section
    /// carries fewer tokens than its counts declare, where they are tokens.
    #[error("truncated payload: need {needed}, got {got}")]
    Truncated {
        /// Units the declared structure requires
        needed: usize,
        /// Units actually available
        got: usize,
    },

    /// Malformed slice bounds
    #[error("invalid slice range {start}..{end} for {len} byte(s)")]
    InvalidRange {
        /// Requested start offset
        start: usize,
        /// Requested end offset
        end: usize,
        /// Length of the sliced buffer
        len: usize,
    },

    /// Text section is not valid UTF-8
    #[error("invalid text: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
