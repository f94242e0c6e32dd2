use std::time::Instant;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, HighlightSpacing, List, ListItem, Paragraph,
};
use ratatui::Frame;

use crate::core::animation::{INPUT_ROW_ENTRANCE, TASK_ROW_ENTRANCE};
use crate::core::{DisplayRow, SEPARATOR_LABEL};
use crate::tui::constants::{
    ADD_BUTTON_LABEL, ADD_BUTTON_WIDTH, APP_VERSION, CHECKBOX_WIDTH, DELETE_GLYPH, DELETE_WIDTH,
    HEADER_TITLE, HELP_BROWSE, HIGHLIGHT_SYMBOL, HIGHLIGHT_WIDTH, INPUT_PLACEHOLDER,
    INPUT_ROW_HEIGHT,
};
use crate::tui::helpers::{
    button_label, checkbox, fit_width, header_rows, task_text_style, BG_BASE, BG_BUTTON, BG_INPUT,
    BG_PANEL, FG_MUTED, FG_TEXT,
};

use super::{App, InputMode};

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let now = Instant::now();
        self.entrances
            .observe(self.list.tasks().iter().map(|task| task.id), now);

        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);

        let header_height = header_rows(self.header.size_for(self.scroll_units()));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(3),
                Constraint::Length(INPUT_ROW_HEIGHT),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_header(f, chunks[0]);
        self.draw_tasks(f, chunks[1], now);
        self.draw_input(f, chunks[2], now);
        self.draw_footer(f, chunks[3]);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }
        let open = self.list.incomplete().len();
        let done = self.list.completed().len();

        let padding = usize::from(area.height.saturating_sub(1) / 2);
        let mut lines: Vec<Line> = vec![Line::default(); padding];
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {HEADER_TITLE}"),
                Style::default().fg(FG_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {open} open · {done} done"),
                Style::default().fg(FG_MUTED),
            ),
        ]));
        f.render_widget(
            Paragraph::new(lines).style(Style::default().bg(BG_BASE)),
            area,
        );

        let version = Paragraph::new(Line::from(Span::styled(
            format!("v{APP_VERSION} "),
            Style::default().fg(FG_MUTED),
        )))
        .alignment(Alignment::Right);
        let version_area = Rect {
            y: area.y + area.height.saturating_sub(1) / 2,
            height: 1,
            ..area
        };
        f.render_widget(version, version_area);
    }

    fn draw_tasks(&mut self, f: &mut Frame<'_>, area: Rect, now: Instant) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(FG_MUTED))
            .style(Style::default().bg(BG_PANEL));
        let inner = block.inner(area);

        let text_width = usize::from(
            inner
                .width
                .saturating_sub(HIGHLIGHT_WIDTH + CHECKBOX_WIDTH + DELETE_WIDTH),
        );
        let selected_index = self.selected_row_index();

        let items: Vec<ListItem> = self
            .list
            .display_rows()
            .into_iter()
            .map(|row| match row {
                DisplayRow::Task(task_row) => {
                    let elapsed = self.entrances.row_elapsed(task_row.task.id, now);
                    let phase = TASK_ROW_ENTRANCE.phase(elapsed);
                    let done = task_row.is_done();
                    let box_style = if done {
                        Style::default().fg(FG_TEXT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(FG_MUTED)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(checkbox(done), box_style),
                        Span::styled(
                            fit_width(&task_row.task.text, text_width),
                            task_text_style(done, phase),
                        ),
                        Span::styled(DELETE_GLYPH, Style::default().fg(FG_TEXT)),
                    ]))
                }
                DisplayRow::Separator => ListItem::new(Line::from(Span::styled(
                    format!(" {SEPARATOR_LABEL}"),
                    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD),
                ))),
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(BG_INPUT))
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        self.list_state.select(selected_index);
        f.render_stateful_widget(list, area, &mut self.list_state);

        self.scroll_offset = self.list_state.offset();
        self.hit_map.list = inner;
        self.hit_map.offset = self.scroll_offset;
    }

    fn draw_input(&mut self, f: &mut Frame<'_>, area: Rect, now: Instant) {
        let elapsed = self.entrances.input_elapsed(now);
        let slide = INPUT_ROW_ENTRANCE.offset_rows(elapsed, area.height);
        let area = Rect {
            y: area.y + slide,
            height: area.height - slide,
            ..area
        };
        if area.height == 0 {
            self.hit_map.input = Rect::default();
            self.hit_map.add_button = Rect::default();
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(ADD_BUTTON_WIDTH)])
            .split(area);

        let focused = self.input_mode == InputMode::Insert;
        let border_style = if focused {
            Style::default().fg(FG_TEXT)
        } else {
            Style::default().fg(FG_MUTED)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(BG_INPUT));
        let inner = block.inner(cols[0]);

        let content = if self.input.is_empty() {
            Line::from(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(FG_MUTED)))
        } else {
            Line::from(Span::styled(
                self.input.as_str().to_owned(),
                Style::default().fg(FG_TEXT),
            ))
        };
        f.render_widget(Paragraph::new(content).block(block), cols[0]);

        let button = Paragraph::new(button_label(ADD_BUTTON_LABEL))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(BG_BUTTON)),
            )
            .style(Style::default().bg(BG_BUTTON));
        f.render_widget(button, cols[1]);

        if focused && inner.width > 0 && inner.height > 0 {
            let col = u16::try_from(self.input.cursor_col()).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
            f.set_cursor(x, inner.y);
        }

        self.hit_map.input = cols[0];
        self.hit_map.add_button = cols[1];
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let line = match &self.status {
            Some(status) => Line::from(Span::styled(status.text.clone(), status.style())),
            None => Line::from(Span::styled(HELP_BROWSE, Style::default().fg(FG_MUTED))),
        };
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BASE)),
            area,
        );
    }
}
