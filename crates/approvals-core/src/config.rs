use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::remover::DeletionMode;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the test framework writes its logs into.
    pub temp_dir: PathBuf,
    pub failed_comparison_log: PathBuf,
    pub approved_files_log: PathBuf,
    /// Where to look for approved files. Defaults to the parent of `temp_dir`.
    pub scan_root: Option<PathBuf>,
    pub approved_pattern: String,
    pub ignore_patterns: Vec<String>,
    pub default_mode: DeletionMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            temp_dir: PathBuf::from(".approval_tests_temp"),
            failed_comparison_log: PathBuf::from(".failed_comparison.log"),
            approved_files_log: PathBuf::from(".approved_files.log"),
            scan_root: None,
            approved_pattern: "*.approved.*".to_string(),
            ignore_patterns: Vec::new(),
            default_mode: DeletionMode::Prompt,
        }
    }
}

impl AppConfig {
    pub fn failed_comparison_log_path(&self) -> PathBuf {
        self.temp_dir.join(&self.failed_comparison_log)
    }

    pub fn approved_files_log_path(&self) -> PathBuf {
        self.temp_dir.join(&self.approved_files_log)
    }

    pub fn scan_root_path(&self) -> PathBuf {
        if let Some(root) = &self.scan_root {
            return root.clone();
        }
        match self.temp_dir.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Layers `Config.toml` (optional) and `APPROVALS_*` environment variables
/// over the defaults.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(
            Environment::with_prefix("APPROVALS")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("ignore_patterns"),
        )
        .build()?;
    builder.try_deserialize::<AppConfig>()
}
