use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = tasklist::cli::Cli::parse();
    let config = tasklist::config::from_cli(&cli)?;
    tasklist::logging::init_tracing(&config)?;
    tasklist::tui::run(config)
}
