use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".shopping-list";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "shoppingdb.sqlite";
/// Diagnostic log written next to the database.
const LOG_FILE_NAME: &str = "shopping-list.log";

/// Where the application keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub database: PathBuf,
    pub log_file: PathBuf,
}

impl AppPaths {
    /// Resolve the default layout inside the user's home.
    pub fn resolve() -> Result<Self> {
        let base_dirs =
            BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::in_dir(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the files out under an arbitrary directory.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            database: data_dir.join(DB_FILE_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_inside_the_data_dir() {
        let paths = AppPaths::in_dir("/tmp/shop");
        assert_eq!(paths.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(paths.database, PathBuf::from("/tmp/shop/shoppingdb.sqlite"));
        assert_eq!(paths.log_file, PathBuf::from("/tmp/shop/shopping-list.log"));
    }
}
