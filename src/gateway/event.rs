//! Decoded inbound events

use std::fmt;

use crate::protocol::{FeatureAnnouncement, TaskReport};

/// A decoded device message, ready for delivery to observers.
///
/// Every observer of a given event sees the same decoded value; the core
/// never publishes partially decoded data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A device reported a task execution
    TaskReportReceived(TaskReport),
    /// A device announced its supported tasks
    FeatureAnnounced(FeatureAnnouncement),
}

impl Event {
    /// Device the event originated from
    #[must_use]
    pub fn device_id(&self) -> u16 {
        match self {
            Self::TaskReportReceived(report) => report.device_id,
            Self::FeatureAnnounced(announcement) => announcement.device_id,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TaskReportReceived(report) => {
                write!(
                    f,
                    "TaskReportReceived(device {}, task {:?})",
                    report.device_id, report.task_name
                )
            }
            Self::FeatureAnnounced(announcement) => {
                write!(
                    f,
                    "FeatureAnnounced(device {}, {} task(s))",
                    announcement.device_id,
                    announcement.tasks.len()
                )
            }
        }
    }
}
