use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(50);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const HEADER_TITLE: &str = "To-Do's";
pub(crate) const INPUT_PLACEHOLDER: &str = "Add new task";
pub(crate) const ADD_BUTTON_LABEL: &str = " + ";

/// Scroll units reported to the header per list row scrolled past.
pub(crate) const SCROLL_UNITS_PER_ROW: f32 = 20.0;
/// Header size units that make up one terminal row.
pub(crate) const HEADER_UNITS_PER_ROW: f32 = 12.0;

pub(crate) const INPUT_ROW_HEIGHT: u16 = 3;
pub(crate) const ADD_BUTTON_WIDTH: u16 = 7;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const HIGHLIGHT_WIDTH: u16 = 2;
pub(crate) const CHECKBOX_WIDTH: u16 = 4;
pub(crate) const DELETE_GLYPH: &str = " ✖ ";
pub(crate) const DELETE_WIDTH: u16 = 3;

pub(crate) const HELP_BROWSE: &str =
    "i/a: new task • j/k: move • space: toggle • x: delete • click ✖ to delete • q: quit";
pub(crate) const HELP_INSERT: &str = "Type a task • Enter: add • Esc: back to list";
pub(crate) const STATUS_EMPTY_INPUT: &str = "Type something before adding a task";
pub(crate) const STATUS_IDS_EXHAUSTED: &str = "No ids left for new tasks";
pub(crate) const STATUS_NOTHING_SELECTED: &str = "No task selected";
