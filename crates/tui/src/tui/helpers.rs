use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::animation::EntrancePhase;
use crate::tui::constants::HEADER_UNITS_PER_ROW;

pub const BG_BASE: Color = Color::Rgb(229, 231, 235);
pub const BG_PANEL: Color = Color::Rgb(243, 244, 246);
pub const BG_INPUT: Color = Color::Rgb(209, 213, 219);
pub const BG_BUTTON: Color = Color::Rgb(17, 24, 39);
pub const FG_TEXT: Color = Color::Black;
pub const FG_MUTED: Color = Color::Rgb(107, 114, 128);

/// Terminal rows for a header of the given size. Never less than one.
pub fn header_rows(size: f32) -> u16 {
    let rows = (size / HEADER_UNITS_PER_ROW).round();
    if rows.is_finite() && rows >= 1.0 {
        rows.min(f32::from(u16::MAX)) as u16
    } else {
        1
    }
}

pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x] "
    } else {
        "[ ] "
    }
}

pub fn task_text_style(done: bool, phase: EntrancePhase) -> Style {
    let base = Style::default().bg(BG_PANEL);
    if done {
        return base.fg(FG_MUTED).add_modifier(Modifier::CROSSED_OUT);
    }
    match phase {
        EntrancePhase::Entering => base.fg(BG_INPUT),
        EntrancePhase::Settling => base.fg(FG_MUTED),
        EntrancePhase::Settled => base.fg(FG_TEXT),
    }
}

/// Pad or cut `text` so that it fills exactly `width` terminal columns.
pub fn fit_width(text: &str, width: usize) -> String {
    let columns = UnicodeWidthStr::width(text);
    if columns <= width {
        let mut out = String::with_capacity(text.len() + width - columns);
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - columns));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    // Leave one column for the ellipsis.
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(budget - used));
    out.push('…');
    out
}

pub fn button_label(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )])
}
