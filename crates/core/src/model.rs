use std::fmt;

use serde::Serialize;

/// Identifier assigned to a task when it is created.
pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Build a task that has not been completed yet.
    pub fn open<T: Into<String>>(id: TaskId, text: T) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Build a task that is already marked as done. Only seed data uses this.
    pub fn done<T: Into<String>>(id: TaskId, text: T) -> Self {
        Self {
            id,
            text: text.into(),
            completed: true,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "done"
        } else {
            "open"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}] {}", self.id, self.status_label(), self.text)
    }
}
