pub use tasklist_tui::cli;
pub use tasklist_tui::config;
pub use tasklist_tui::logging;
pub use tasklist_tui::tui;
pub use tasklist_tui::AppConfig;

pub use tasklist_core as core;
pub use tasklist_core::model;
pub use tasklist_core::{TaskError, TaskList};
