use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::ListState;
use tracing::{info, warn};

use super::buffer::TextBuffer;
use super::constants::*;
use super::entrance::EntranceTracker;
use crate::config::AppConfig;
use crate::core::{HeaderScale, TaskError, TaskList};
use crate::model::TaskId;

mod input;
mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Browse,
    Insert,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    created_at: Instant,
}

impl StatusMessage {
    fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    fn style(&self) -> Style {
        Style::default().fg(Color::Blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowZone {
    Checkbox,
    Body,
    Delete,
}

/// Screen regions from the last frame, used to route mouse clicks.
#[derive(Debug, Clone, Copy, Default)]
struct HitMap {
    list: Rect,
    offset: usize,
    input: Rect,
    add_button: Rect,
}

impl HitMap {
    /// Display row index and zone under a click inside the list.
    fn list_hit(&self, column: u16, row: u16) -> Option<(usize, RowZone)> {
        if !contains(self.list, column, row) {
            return None;
        }
        let index = self.offset + usize::from(row - self.list.y);
        let checkbox_end = self.list.x + HIGHLIGHT_WIDTH + CHECKBOX_WIDTH;
        let delete_start = self.list.right().saturating_sub(DELETE_WIDTH);
        let zone = if column < checkbox_end {
            RowZone::Checkbox
        } else if column >= delete_start {
            RowZone::Delete
        } else {
            RowZone::Body
        };
        Some((index, zone))
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

pub(crate) struct App {
    list: TaskList,
    header: HeaderScale,
    input_mode: InputMode,
    input: TextBuffer,
    selected: Option<TaskId>,
    list_state: ListState,
    scroll_offset: usize,
    hit_map: HitMap,
    entrances: EntranceTracker,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: &AppConfig, list: TaskList, now: Instant) -> Self {
        let selected = list.display_rows().iter().find_map(|row| row.task_id());
        let mut app = Self {
            list,
            header: HeaderScale::default(),
            input_mode: InputMode::Browse,
            input: TextBuffer::new(),
            selected,
            list_state: ListState::default(),
            scroll_offset: 0,
            hit_map: HitMap::default(),
            entrances: EntranceTracker::new(now),
            status: None,
            should_quit: false,
        };
        app.set_status_info(format!("Logging to {}", config.log_path().display()));
        app
    }

    pub(crate) fn on_tick(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn task_count(&self) -> usize {
        self.list.len()
    }

    /// Task ids in the order they are displayed; the separator is skipped.
    fn selectable_ids(&self) -> Vec<TaskId> {
        self.list
            .display_rows()
            .iter()
            .filter_map(|row| row.task_id())
            .collect()
    }

    fn selected_row_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.list
            .display_rows()
            .iter()
            .position(|row| row.task_id() == Some(selected))
    }

    fn select_offset(&mut self, forward: bool) {
        let ids = self.selectable_ids();
        if ids.is_empty() {
            self.selected = None;
            return;
        }
        let current = self
            .selected
            .and_then(|id| ids.iter().position(|candidate| *candidate == id));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(idx), true) => (idx + 1).min(ids.len() - 1),
            (Some(idx), false) => idx.saturating_sub(1),
        };
        self.selected = Some(ids[next]);
    }

    fn select_next(&mut self) {
        self.select_offset(true);
    }

    fn select_prev(&mut self) {
        self.select_offset(false);
    }

    fn select_first(&mut self) {
        self.selected = self.selectable_ids().first().copied();
    }

    fn select_last(&mut self) {
        self.selected = self.selectable_ids().last().copied();
    }

    fn sync_pending_input(&mut self) {
        self.list.set_pending_input(self.input.as_str());
    }

    fn submit_input(&mut self) {
        self.sync_pending_input();
        match self.list.add_task() {
            Ok(id) => {
                self.input.clear();
                if self.selected.is_none() {
                    self.selected = Some(id);
                }
                self.status = None;
            }
            Err(TaskError::EmptyInput) => self.set_status_info(STATUS_EMPTY_INPUT),
            Err(err @ TaskError::IdsExhausted) => {
                warn!(error = %err, "task not added");
                self.set_status_info(STATUS_IDS_EXHAUSTED);
            }
        }
    }

    fn toggle_task(&mut self, id: TaskId) {
        if let Some(task) = self.list.toggle_task_completion(id) {
            info!(task_id = task.id, completed = task.completed, "toggled");
        }
    }

    fn toggle_selected(&mut self) {
        match self.selected {
            Some(id) => self.toggle_task(id),
            None => self.set_status_info(STATUS_NOTHING_SELECTED),
        }
    }

    /// Delete a task and move the selection to its neighbour when it was selected.
    fn delete_task(&mut self, id: TaskId) {
        let ids = self.selectable_ids();
        let position = ids.iter().position(|candidate| *candidate == id);
        if self.list.delete_task(id).is_none() {
            return;
        }
        info!(task_id = id, "deleted");

        if self.selected == Some(id) {
            let remaining = self.selectable_ids();
            self.selected = position
                .and_then(|idx| remaining.get(idx).or_else(|| remaining.last()))
                .copied();
        }
    }

    fn delete_selected(&mut self) {
        match self.selected {
            Some(id) => self.delete_task(id),
            None => self.set_status_info(STATUS_NOTHING_SELECTED),
        }
    }

    fn scroll_units(&self) -> f32 {
        self.scroll_offset as f32 * SCROLL_UNITS_PER_ROW
    }

    pub(crate) fn set_status_info<T: Into<String>>(&mut self, message: T) {
        self.status = Some(StatusMessage::new(message));
    }
}
