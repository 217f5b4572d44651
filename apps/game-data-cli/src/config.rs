//! Command line configuration.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GAME_DATA_DIR";

/// Resolved locations of the data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Resolve from the `--data-dir` flag, then `GAME_DATA_DIR`, then `data`.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load(flag: Option<PathBuf>) -> Self {
        dotenvy::dotenv().ok();
        Self::from_sources(flag, std::env::var(DATA_DIR_ENV).ok())
    }

    pub fn from_sources(flag: Option<PathBuf>, env_value: Option<String>) -> Self {
        let data_dir = flag
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(game_data_core::DEFAULT_DATA_DIR));
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn quests_path(&self) -> PathBuf {
        self.data_dir.join(game_data_core::QUESTS_FILE_NAME)
    }

    pub fn items_path(&self) -> PathBuf {
        self.data_dir.join(game_data_core::ITEMS_FILE_NAME)
    }
}
