use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::ids::IdStrategy;

static DEFAULT_LOG_NAME: &str = "tasklist.log";
static DEFAULT_LOG_FILTER: &str = "info";
pub static ENV_DATA_DIR: &str = "TASKLIST_DATA_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "tasklist", "tasklist"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    log_path: PathBuf,
    log_filter: String,
    id_strategy: IdStrategy,
    seed_demo: bool,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory using the provided override,
    /// environment variables, and platform defaults.
    pub fn discover(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).with_context(|| {
                format!("Failed to create data directory at {}", data_dir.display())
            })?;
        }
        Self::from_data_dir(data_dir)
    }

    /// Construct [`AppConfig`] directly from a resolved data directory.
    pub fn from_data_dir(data_dir: PathBuf) -> Result<Self> {
        let log_path = data_dir.join(DEFAULT_LOG_NAME);
        Ok(Self {
            data_dir,
            log_path,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            id_strategy: IdStrategy::default(),
            seed_demo: true,
        })
    }

    pub fn with_log_filter<T: Into<String>>(mut self, filter: T) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_seed_demo(mut self, seed_demo: bool) -> Self {
        self.seed_demo = seed_demo;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn seed_demo(&self) -> bool {
        self.seed_demo
    }
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        if !env_dir.trim().is_empty() {
            return Ok(PathBuf::from(env_dir));
        }
    }

    if cfg!(debug_assertions) {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let dev_dir = manifest_dir.join("..").join("tmp").join("dev-tasklist");
        return Ok(dev_dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(base) = BaseDirs::new() {
            return Ok(base.home_dir().join(".tasklist"));
        }
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".tasklist"));
    }

    Ok(env::current_dir()?.join(".tasklist"))
}
