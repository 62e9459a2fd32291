use super::timestamp::Timestamp;
use crate::error::{QueueError, Result};
use std::cmp::Ordering;

/// A named task with a due date
///
/// Tasks are immutable. Postponing produces a new task with the same name,
/// which the caller re-inserts into the queue.
///
/// Ordering is by due date first, then by name (byte-wise lexicographic),
/// so two tasks compare equal only when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Task {
    name: String,
    due: Timestamp,
}

impl Task {
    /// Create a new task
    ///
    /// # Arguments
    /// * `name` - Display name; must be non-empty and free of `,`, `\n` and `\r`
    /// * `due` - When the task should be completed
    ///
    /// # Returns
    /// `QueueError::InvalidName` if the name cannot be stored losslessly
    pub fn new(name: impl Into<String>, due: Timestamp) -> Result<Self> {
        let name = name.into();
        if !is_storable_name(&name) {
            return Err(QueueError::InvalidName(name));
        }
        Ok(Self { name, due })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn due(&self) -> Timestamp {
        self.due
    }

    /// Same task, new due date
    pub fn postpone(&self, due: Timestamp) -> Self {
        Self {
            name: self.name.clone(),
            due,
        }
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_storable_name(name: &str) -> bool {
    !name.is_empty() && !name.contains([',', '\n', '\r'])
}
