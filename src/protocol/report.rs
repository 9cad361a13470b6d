//! Task report decoder
//!
//! # Wire Format (after the discriminator byte)
//!
//! ```text
//! [device id (2, BE)] [value count (1)] [values (1 each)] [task name (rest)]
//! ```
//!
//! Values are one byte each, matching what the command encoder writes. The
//! task name is whatever bytes remain once the declared values are consumed.

use super::{DEVICE_ID_WIDTH, Error, Result, wire};

/// A device's notification that a task executed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskReport {
    /// Reporting device
    pub device_id: u16,
    /// Parameter values the task ran with, in order
    pub parameters: Vec<u8>,
    /// Name of the executed task
    pub task_name: String,
}

/// Decode a task report from a discriminator-stripped payload.
///
/// # Errors
///
/// [`Error::Truncated`] if the payload is shorter than the fixed head or
/// than the declared value count requires; [`Error::InvalidText`] if the
/// task name bytes are not valid UTF-8. Never reads past the buffer.
pub fn decode_task_report(payload: &[u8]) -> Result<TaskReport> {
    let head = DEVICE_ID_WIDTH + 1;
    if payload.len() < head {
        return Err(Error::Truncated {
            needed: head,
            got: payload.len(),
        });
    }

    let device_id = wire::decode_unsigned(wire::slice(payload, 0, DEVICE_ID_WIDTH)?) as u16;
    let value_count = wire::decode_unsigned(wire::slice(payload, DEVICE_ID_WIDTH, head)?) as usize;

    let values_end = head + value_count;
    if payload.len() < values_end {
        return Err(Error::Truncated {
            needed: values_end,
            got: payload.len(),
        });
    }

    let parameters = wire::slice(payload, head, values_end)?.to_vec();
    let task_name = String::from_utf8(payload[values_end..].to_vec())?;

    Ok(TaskReport {
        device_id,
        parameters,
        task_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        let payload = [0, 7, 2, 1, 2, b'g', b'o'];
        let report = decode_task_report(&payload).unwrap();

        assert_eq!(report.device_id, 7);
        assert_eq!(report.parameters, vec![1, 2]);
        assert_eq!(report.task_name, "go");
    }

    #[test]
    fn test_decode_no_values_empty_name() {
        let report = decode_task_report(&[0xFF, 0xFF, 0]).unwrap();
        assert_eq!(report.device_id, 65535);
        assert_eq!(report.parameters, Vec::<u8>::new());
        assert_eq!(report.task_name, "");
    }

    #[test]
    fn test_decode_value_count_255() {
        let mut payload = vec![0, 1, 255];
        payload.extend(0..=254u8);
        payload.extend_from_slice(b"sweep");

        let report = decode_task_report(&payload).unwrap();
        assert_eq!(report.parameters.len(), 255);
        assert_eq!(report.parameters[254], 254);
        assert_eq!(report.task_name, "sweep");
    }

    #[test]
    fn test_truncated_head() {
        assert!(matches!(
            decode_task_report(&[0, 7]),
            Err(Error::Truncated { needed: 3, got: 2 })
        ));
        assert!(matches!(
            decode_task_report(&[]),
            Err(Error::Truncated { needed: 3, got: 0 })
        ));
    }

    #[test]
    fn test_truncated_values() {
        // Declares 5 values but carries only 2 (and no name).
        let payload = [0, 7, 5, 1, 2];
        assert!(matches!(
            decode_task_report(&payload),
            Err(Error::Truncated { needed: 8, got: 5 })
        ));
    }

    #[test]
    fn test_invalid_name_bytes() {
        let payload = [0, 7, 0, 0xC3, 0x28];
        assert!(matches!(
            decode_task_report(&payload),
            Err(Error::InvalidText(_))
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Short payloads always fail cleanly, never panic.
            #[test]
            fn prop_truncation_reported(
                value_count in 1u8..,
                extra in prop::collection::vec(any::<u8>(), 0..8),
            ) {
                // Head declares more values than the payload carries.
                let mut payload = vec![0, 1, value_count];
                payload.extend(extra.iter().take(value_count as usize - 1).copied());
                let needed = 3 + value_count as usize;

                if payload.len() < needed {
                    prop_assert!(
                        matches!(decode_task_report(&payload), Err(Error::Truncated { .. })),
                        "expected Truncated"
                    );
                }
            }
        }
    }
}
