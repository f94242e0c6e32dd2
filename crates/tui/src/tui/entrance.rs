use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::model::TaskId;

/// Remembers when each task row and the input row first appeared on screen.
#[derive(Debug)]
pub(crate) struct EntranceTracker {
    started: Instant,
    first_seen: HashMap<TaskId, Instant>,
}

impl EntranceTracker {
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            started: now,
            first_seen: HashMap::new(),
        }
    }

    /// Register the live ids and drop rows that no longer exist.
    pub(crate) fn observe(&mut self, live: impl IntoIterator<Item = TaskId>, now: Instant) {
        let mut current = HashMap::with_capacity(self.first_seen.len());
        for id in live {
            let seen = self.first_seen.get(&id).copied().unwrap_or(now);
            current.insert(id, seen);
        }
        self.first_seen = current;
    }

    pub(crate) fn row_elapsed(&self, id: TaskId, now: Instant) -> Duration {
        self.first_seen
            .get(&id)
            .map(|seen| now.saturating_duration_since(*seen))
            .unwrap_or_default()
    }

    pub(crate) fn input_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.first_seen.len()
    }
}
