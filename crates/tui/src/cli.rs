use std::path::PathBuf;

use clap::Parser;

use crate::core::IdStrategy;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasklist",
    version,
    about = "A single-screen to-do list for the terminal.",
    after_help = "Examples:\n  tasklist                 Launch with the demo tasks\n  tasklist --empty         Start with an empty list\n  tasklist --log debug     Write debug events to the log file\n  tasklist --ids counter   Number tasks 1, 2, 3, ..."
)]
pub struct Cli {
    /// Override the data directory that holds the log file
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter for the log file (e.g. "info" or "info,tasklist_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE")]
    pub log_filter: Option<String>,

    /// How new task ids are assigned
    #[arg(long = "ids", value_enum, value_name = "STRATEGY", default_value_t = IdStrategy::Clock)]
    pub id_strategy: IdStrategy,

    /// Start without the demo tasks
    #[arg(long)]
    pub empty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_first_launch() {
        let cli = Cli::try_parse_from(["tasklist"]).expect("parse");
        assert!(cli.data_dir.is_none());
        assert!(cli.log_filter.is_none());
        assert_eq!(cli.id_strategy, IdStrategy::Clock);
        assert!(!cli.empty);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tasklist",
            "--data-dir",
            "/tmp/tasks",
            "--log",
            "debug",
            "--ids",
            "counter",
            "--empty",
        ])
        .expect("parse");

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tasks")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert_eq!(cli.id_strategy, IdStrategy::Counter);
        assert!(cli.empty);
    }

    #[test]
    fn rejects_unknown_id_strategy() {
        assert!(Cli::try_parse_from(["tasklist", "--ids", "uuid"]).is_err());
    }
}
