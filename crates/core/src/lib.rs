pub mod animation;
pub mod config;
pub mod display;
pub mod error;
pub mod header;
pub mod ids;
pub mod list;
pub mod model;
pub mod seed;

pub use config::AppConfig;
pub use display::{display_rows, DisplayRow, TaskRow, SEPARATOR_LABEL};
pub use error::TaskError;
pub use header::HeaderScale;
pub use ids::{Clock, IdAllocator, IdStrategy, SystemClock};
pub use list::TaskList;
pub use model::{Task, TaskId};

/// Build the task list an app session starts with.
pub fn initial_list(config: &AppConfig) -> TaskList {
    let ids = IdAllocator::new(config.id_strategy());
    if config.seed_demo() {
        TaskList::with_tasks(seed::demo_tasks(), ids)
    } else {
        TaskList::new(ids)
    }
}
