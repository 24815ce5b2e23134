use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".fleet-console";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "fleet.sqlite";

/// Runtime settings. There are no flags or environment variables; the only
/// setting is where the database file lives.
#[derive(Debug, Clone)]
pub struct Config {
    db_path: PathBuf,
}

impl Config {
    /// Place the database inside the user's home directory.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::with_db_path(
            base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME),
        ))
    }

    /// Point at an explicit database file. Tests use this to work inside a
    /// temporary directory instead of the user's home.
    pub fn with_db_path(path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: path.into(),
        }
    }

    /// Location of the SQLite file, also shown in the startup banner.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
