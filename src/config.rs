//! File locations used by the binary. The catalog itself lives next to where
//! the program is started, while the log goes to a per-user data directory so
//! it never lands in whatever folder the user happened to be in.

use std::path::PathBuf;

use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".book-catalog";
/// Log file name stored inside the application data directory.
const LOG_FILE_NAME: &str = "book-catalog.log";
/// SQLite file name, resolved against the working directory.
const DB_FILE_NAME: &str = "books.db";
/// Destination pre-filled in the CSV export prompt.
const CSV_FILE_NAME: &str = "books.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_path: PathBuf,
    pub default_csv_path: PathBuf,
}

impl AppConfig {
    /// Resolve every path for this run. Falls back to the working directory
    /// for the log when no home directory can be found.
    pub fn resolve() -> Self {
        let log_dir = BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(DATA_DIR_NAME))
            .unwrap_or_default();

        Self {
            database_path: PathBuf::from(DB_FILE_NAME),
            log_path: log_dir.join(LOG_FILE_NAME),
            default_csv_path: PathBuf::from(CSV_FILE_NAME),
        }
    }
}
