use std::collections::HashSet;

use tracing::debug;

use crate::display::{display_rows, DisplayRow};
use crate::error::TaskError;
use crate::ids::IdAllocator;
use crate::model::{Task, TaskId};

/// Owns the master task sequence and the text waiting to become a task.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    pending: String,
    ids: IdAllocator,
}

impl TaskList {
    pub fn new(ids: IdAllocator) -> Self {
        Self {
            tasks: Vec::new(),
            pending: String::new(),
            ids,
        }
    }

    /// Start from an existing sequence. Later duplicates of an id are dropped.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>, mut ids: IdAllocator) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for task in tasks {
            if !seen.insert(task.id) {
                debug!(task_id = task.id, "dropping duplicate task id");
                continue;
            }
            ids.observe(task.id);
            kept.push(task);
        }
        Self {
            tasks: kept,
            pending: String::new(),
            ids,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn pending_input(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_input<T: Into<String>>(&mut self, text: T) {
        self.pending = text.into();
    }

    /// Append the pending input as a new open task and clear it.
    ///
    /// Only a zero-length input is rejected; whitespace counts as text. When no
    /// unused id remains the add fails and the pending input is kept.
    pub fn add_task(&mut self) -> Result<TaskId, TaskError> {
        if self.pending.is_empty() {
            return Err(TaskError::EmptyInput);
        }

        let Some(id) = self.ids.next_id() else {
            debug!("add rejected, id space exhausted");
            return Err(TaskError::IdsExhausted);
        };
        let text = std::mem::take(&mut self.pending);
        debug!(task_id = id, len = text.len(), "task added");
        self.tasks.push(Task::open(id, text));
        Ok(id)
    }

    pub fn toggle_task_completion(&mut self, id: TaskId) -> Option<&Task> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(task_id = id, "toggle ignored for unknown task");
            return None;
        };
        task.completed = !task.completed;
        debug!(task_id = id, completed = task.completed, "task toggled");
        Some(&*task)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(task_id = id, "delete ignored for unknown task");
            return None;
        };
        let removed = self.tasks.remove(index);
        debug!(task_id = id, "task deleted");
        Some(removed)
    }

    pub fn incomplete(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| !task.completed).collect()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        display_rows(&self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::tests::ManualClock;
    use crate::ids::IdStrategy;
    use pretty_assertions::assert_eq;

    fn counter_list(tasks: Vec<Task>) -> TaskList {
        TaskList::with_tasks(
            tasks,
            IdAllocator::with_clock(IdStrategy::Counter, ManualClock::at(0)),
        )
    }

    #[test]
    fn add_appends_open_task_and_clears_input() {
        let mut list = counter_list(vec![Task::open(1, "A")]);
        list.set_pending_input("B");

        let id = list.add_task().expect("add");

        assert_eq!(id, 2);
        assert_eq!(list.tasks(), &[Task::open(1, "A"), Task::open(2, "B")]);
        assert_eq!(list.pending_input(), "");
    }

    #[test]
    fn add_with_empty_input_changes_nothing() {
        let mut list = counter_list(vec![Task::open(1, "A")]);

        assert_eq!(list.add_task(), Err(TaskError::EmptyInput));
        assert_eq!(list.tasks(), &[Task::open(1, "A")]);
        assert_eq!(list.pending_input(), "");
    }

    #[test]
    fn whitespace_only_input_is_accepted_verbatim() {
        let mut list = counter_list(Vec::new());
        list.set_pending_input("   ");

        let id = list.add_task().expect("add");
        assert_eq!(list.get(id).map(|task| task.text.as_str()), Some("   "));
    }

    #[test]
    fn pending_input_is_stored_untrimmed() {
        let mut list = counter_list(Vec::new());
        list.set_pending_input("  buy milk \n");
        assert_eq!(list.pending_input(), "  buy milk \n");
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut list = counter_list(vec![Task::open(1, "A"), Task::open(2, "B")]);

        assert_eq!(list.toggle_task_completion(1).map(|t| t.completed), Some(true));
        assert_eq!(list.toggle_task_completion(1).map(|t| t.completed), Some(false));
        assert_eq!(list.tasks(), &[Task::open(1, "A"), Task::open(2, "B")]);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut list = counter_list(vec![Task::open(1, "A"), Task::done(2, "B")]);
        let before = list.tasks().to_vec();

        assert!(list.toggle_task_completion(99).is_none());
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_the_match() {
        let mut list = counter_list(vec![
            Task::open(1, "A"),
            Task::open(2, "B"),
            Task::open(3, "C"),
        ]);

        let removed = list.delete_task(2).expect("delete");

        assert_eq!(removed.text, "B");
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks(), &[Task::open(1, "A"), Task::open(3, "C")]);
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut list = counter_list(vec![Task::open(1, "A")]);
        assert!(list.delete_task(42).is_none());
        assert_eq!(list.tasks(), &[Task::open(1, "A")]);
    }

    #[test]
    fn derived_views_partition_the_sequence() {
        let list = counter_list(vec![
            Task::done(1, "A"),
            Task::open(2, "B"),
            Task::open(3, "C"),
            Task::done(4, "D"),
        ]);

        let open: Vec<TaskId> = list.incomplete().iter().map(|t| t.id).collect();
        let done: Vec<TaskId> = list.completed().iter().map(|t| t.id).collect();
        assert_eq!(open, vec![2, 3]);
        assert_eq!(done, vec![1, 4]);
        assert_eq!(open.len() + done.len(), list.len());
    }

    #[test]
    fn seeded_duplicates_keep_first_occurrence() {
        let list = counter_list(vec![
            Task::open(1, "first"),
            Task::open(1, "second"),
            Task::done(2, "other"),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|t| t.text.as_str()), Some("first"));
    }

    #[test]
    fn new_ids_skip_past_seeded_ids() {
        let mut list = TaskList::with_tasks(
            vec![Task::open(5_000, "future")],
            IdAllocator::with_clock(IdStrategy::Clock, ManualClock::at(10)),
        );
        list.set_pending_input("now");

        assert_eq!(list.add_task(), Ok(5_001));
    }

    #[test]
    fn add_after_the_largest_id_fails_without_duplicating() {
        let mut list = counter_list(vec![Task::open(u64::MAX, "seed")]);
        list.set_pending_input("new");

        assert_eq!(list.add_task(), Err(TaskError::IdsExhausted));
        assert_eq!(list.tasks(), &[Task::open(u64::MAX, "seed")]);
        assert_eq!(list.pending_input(), "new");
    }
}
