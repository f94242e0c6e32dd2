use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::tui::constants::HELP_INSERT;

use super::{contains, App, InputMode, RowZone};

#[derive(Debug, Clone, Copy)]
enum BrowseAction {
    Quit,
    FocusInput,
    Toggle,
    Delete,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
}

impl BrowseAction {
    fn from_event(key: &KeyEvent) -> Option<Self> {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Tab => Some(Self::FocusInput),
            KeyCode::Char(' ') | KeyCode::Enter => Some(Self::Toggle),
            KeyCode::Char('x') | KeyCode::Delete => Some(Self::Delete),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home | KeyCode::Char('g') => Some(Self::SelectFirst),
            KeyCode::End | KeyCode::Char('G') => Some(Self::SelectLast),
            _ => None,
        }
    }
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Browse => self.handle_browse_mode(key),
            InputMode::Insert => self.handle_insert_mode(key),
        }
    }

    fn handle_browse_mode(&mut self, key: KeyEvent) {
        if let Some(action) = BrowseAction::from_event(&key) {
            self.execute_browse_action(action);
        }
    }

    fn execute_browse_action(&mut self, action: BrowseAction) {
        match action {
            BrowseAction::Quit => self.should_quit = true,
            BrowseAction::FocusInput => self.focus_input(),
            BrowseAction::Toggle => self.toggle_selected(),
            BrowseAction::Delete => self.delete_selected(),
            BrowseAction::SelectNext => self.select_next(),
            BrowseAction::SelectPrev => self.select_prev(),
            BrowseAction::SelectFirst => self.select_first(),
            BrowseAction::SelectLast => self.select_last(),
        }
    }

    fn focus_input(&mut self) {
        self.input_mode = InputMode::Insert;
        self.set_status_info(HELP_INSERT);
    }

    fn handle_insert_mode(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc | KeyCode::Tab => {
                self.input_mode = InputMode::Browse;
                self.status = None;
            }
            KeyCode::Char(c) => {
                self.input.insert_char(c);
                self.sync_pending_input();
            }
            KeyCode::Backspace => {
                self.input.backspace();
                self.sync_pending_input();
            }
            KeyCode::Delete => {
                self.input.delete_char();
                self.sync_pending_input();
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    pub(crate) fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::ScrollUp => self.select_prev(),
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        if contains(self.hit_map.add_button, column, row) {
            self.submit_input();
            return;
        }
        if contains(self.hit_map.input, column, row) {
            self.focus_input();
            return;
        }

        let Some((index, zone)) = self.hit_map.list_hit(column, row) else {
            return;
        };
        let Some(id) = self
            .list
            .display_rows()
            .get(index)
            .and_then(|display_row| display_row.task_id())
        else {
            return;
        };

        self.input_mode = InputMode::Browse;
        match zone {
            RowZone::Checkbox => {
                self.selected = Some(id);
                self.toggle_task(id);
            }
            RowZone::Delete => self.delete_task(id),
            RowZone::Body => self.selected = Some(id),
        }
    }
}
