//! Tracing setup. Events go to a file because the terminal belongs to the UI.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(config.log_filter(), env)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())
        .with_context(|| format!("failed to open log file {}", config.log_path().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();
    Ok(())
}

/// Parse the configured filter, then apply `RUST_LOG` directives on top. Bad
/// `RUST_LOG` entries are skipped; a bad configured filter is an error.
fn build_filter(configured: &str, env: Option<String>) -> Result<EnvFilter> {
    let mut filter = EnvFilter::builder()
        .parse(configured)
        .with_context(|| format!("invalid log filter '{configured}'"))?;
    for raw in env.iter().flat_map(|value| value.split(',')) {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        if let Ok(directive) = raw.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_log_file_in_data_dir() {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");

        init_tracing(&config).expect("init tracing");
        init_tracing(&config).expect("second init is harmless");

        assert!(config.log_path().exists());
    }

    #[test]
    fn rejects_malformed_directive() {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().to_path_buf())
            .expect("config")
            .with_log_filter("tasklist=loud");

        assert!(init_tracing(&config).is_err());
    }

    #[test]
    fn accepts_comma_separated_filters() {
        let filter = build_filter("info,tasklist_core=debug", None).expect("filter");
        let rendered = filter.to_string();

        assert!(rendered.contains("tasklist_core=debug"));
        assert!(rendered.contains("info"));
    }

    #[test]
    fn env_directives_layer_over_configured_filter() {
        let filter = build_filter("info", Some("tasklist_tui=trace,nonsense=loud".into()))
            .expect("filter");
        let rendered = filter.to_string();

        assert!(rendered.contains("tasklist_tui=trace"));
        assert!(!rendered.contains("nonsense"));
    }
}
