pub use tasklist_core::config::*;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::discover(cli.data_dir.clone())?
        .with_id_strategy(cli.id_strategy)
        .with_seed_demo(!cli.empty);
    if let Some(filter) = &cli.log_filter {
        config = config.with_log_filter(filter.clone());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn cli_flags_flow_into_config() {
        let dir = TempDir::new().expect("temp dir");
        let data_dir = dir.path().join("data");
        let cli = Cli::try_parse_from([
            "tasklist",
            "--data-dir",
            data_dir.to_str().expect("utf8 path"),
            "--empty",
            "--ids",
            "counter",
            "--log",
            "warn",
        ])
        .expect("parse");

        let config = from_cli(&cli).expect("config");

        assert_eq!(config.data_dir(), data_dir.as_path());
        assert!(!config.seed_demo());
        assert_eq!(config.id_strategy(), tasklist_core::IdStrategy::Counter);
        assert_eq!(config.log_filter(), "warn");
    }
}
