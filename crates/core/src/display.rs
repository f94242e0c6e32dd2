//! Pure projection from the master task sequence to the rows a view renders.

use crate::model::{Task, TaskId};

pub const SEPARATOR_LABEL: &str = "Completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
}

impl<'a> TaskRow<'a> {
    /// Whether the row gets the "done" treatment (struck through, dimmed).
    pub fn is_done(&self) -> bool {
        self.task.completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow<'a> {
    Task(TaskRow<'a>),
    Separator,
}

impl<'a> DisplayRow<'a> {
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            DisplayRow::Task(row) => Some(row.task.id),
            DisplayRow::Separator => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, DisplayRow::Task(_))
    }

    pub fn label(&self) -> &'a str {
        match self {
            DisplayRow::Task(row) => row.task.text.as_str(),
            DisplayRow::Separator => SEPARATOR_LABEL,
        }
    }
}

/// Incomplete tasks, one separator, then completed tasks. Insertion order is kept
/// within each group and the separator is emitted even when a group is empty.
pub fn display_rows(tasks: &[Task]) -> Vec<DisplayRow<'_>> {
    let mut rows = Vec::with_capacity(tasks.len() + 1);
    rows.extend(
        tasks
            .iter()
            .filter(|task| !task.completed)
            .map(|task| DisplayRow::Task(TaskRow { task })),
    );
    rows.push(DisplayRow::Separator);
    rows.extend(
        tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| DisplayRow::Task(TaskRow { task })),
    );
    rows
}
