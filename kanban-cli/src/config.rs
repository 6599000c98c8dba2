//! Configuration loading using figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. `kanban.toml` in the working directory, or the file given with `--config`
//! 3. Environment variables with the `KANBAN_` prefix
//! 4. Command line flags

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use kanban_engine::{BoardConfig, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// File read when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "kanban.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KANBAN_";

/// Everything the CLI needs to open a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory that holds the board file
    pub data_dir: PathBuf,
    /// Storage key; also the board file name without extension
    pub storage_key: String,
    /// Maximum undo depth in the shell
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
    /// Save after undo/redo as well as after changes
    pub persist_navigation: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            data_dir: PathBuf::from(".kanban"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: board.history_limit,
            persist_navigation: board.persist_navigation,
        }
    }
}

impl CliConfig {
    /// Load configuration from defaults, file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, figment::Error> {
        let file = config_file.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        debug!(file = %file.display(), "loading configuration");

        Figment::new()
            .merge(Serialized::defaults(CliConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }

    /// Apply command line overrides
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// The engine's share of the configuration
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            storage_key: self.storage_key.clone(),
            history_limit: self.history_limit,
            persist_navigation: self.persist_navigation,
        }
    }
}
