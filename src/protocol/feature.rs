//! Feature announcement decoder
//!
//! # Wire Format (after the discriminator byte)
//!
//! ```text
//! [device id (2, BE)] [task count (1)] [param counts (1 × task count)] [text section (rest)]
//! ```
//!
//! The text section is CR-delimited tokens: first one name per declared
//! task, then the parameter names, consumed greedily `param_counts[i]` at a
//! time. Consecutive delimiters collapse; devices in the field emit trailing
//! and doubled CRs and no empty token may ever surface from them.

use super::{DEVICE_ID_WIDTH, Error, Result, TOKEN_DELIMITER, wire};

/// One task a device supports, with its parameter names in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskDescriptor {
    /// Task name
    pub name: String,
    /// Names of the task's parameters, in the order the task expects them
    pub parameter_names: Vec<String>,
}

/// A device's self-description: every task it can run.
///
/// Task lists are ragged; each task carries exactly the parameter names it
/// declared, with no padding to a common width.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureAnnouncement {
    /// Announcing device
    pub device_id: u16,
    /// Supported tasks in announcement order
    pub tasks: Vec<TaskDescriptor>,
}

/// Decode a feature announcement from a discriminator-stripped payload.
///
/// # Errors
///
/// [`Error::Truncated`] if the payload is shorter than the count table
/// requires, or if the text section carries fewer tokens than the declared
/// counts demand; [`Error::InvalidText`] on non-UTF-8 text.
pub fn decode_feature_announcement(payload: &[u8]) -> Result<FeatureAnnouncement> {
    let head = DEVICE_ID_WIDTH + 1;
    if payload.len() < head {
        return Err(Error::Truncated {
            needed: head,
            got: payload.len(),
        });
    }

    let device_id = wire::decode_unsigned(wire::slice(payload, 0, DEVICE_ID_WIDTH)?) as u16;
    let task_count = wire::decode_unsigned(wire::slice(payload, DEVICE_ID_WIDTH, head)?) as usize;

    let counts_end = head + task_count;
    if payload.len() < counts_end {
        return Err(Error::Truncated {
            needed: counts_end,
            got: payload.len(),
        });
    }
    let param_counts = wire::slice(payload, head, counts_end)?.to_vec();

    let text = String::from_utf8(payload[counts_end..].to_vec())?;
    let mut tokens = tokenize(&text);

    let needed = task_count + param_counts.iter().map(|&c| c as usize).sum::<usize>();
    if tokens.len() < needed {
        return Err(Error::Truncated {
            needed,
            got: tokens.len(),
        });
    }

    let names: Vec<String> = tokens.drain(..task_count).collect();
    let mut tasks = Vec::with_capacity(task_count);
    let mut rest = tokens.into_iter();
    for (name, &count) in names.into_iter().zip(param_counts.iter()) {
        let parameter_names = rest.by_ref().take(count as usize).collect();
        tasks.push(TaskDescriptor {
            name,
            parameter_names,
        });
    }

    Ok(FeatureAnnouncement { device_id, tasks })
}

/// Split the text section on CR, collapsing consecutive delimiters so no
/// empty token is ever produced.
fn tokenize(text: &str) -> Vec<String> {
    text.split(TOKEN_DELIMITER as char)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
