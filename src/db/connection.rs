use std::fs;
use std::path::Path;

use log::info;
use rusqlite::Connection;

use crate::error::Result;
use crate::models::current_year;

/// Handle to the on-disk catalog. Constructed once at start-up and borrowed by
/// everything that needs to read or write books; dropping it closes the
/// database.
pub struct Catalog {
    pub(super) conn: Connection,
    /// Upper bound for `year`, fixed when the catalog is opened.
    pub(super) current_year: i64,
}

impl Catalog {
    /// Open (or create) the database at `path` and make sure the `books` table
    /// exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let catalog = Self::from_connection(conn)?;
        info!(
            "Opened catalog at {} ({} books)",
            path.display(),
            catalog.count()?
        );
        Ok(catalog)
    }

    /// Private in-memory catalog, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Override the year used as the upper validation bound. The bound is
    /// otherwise taken from the local clock at open time.
    pub fn with_current_year(mut self, year: i64) -> Self {
        self.current_year = year;
        self
    }

    pub fn current_year(&self) -> i64 {
        self.current_year
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        ensure_schema(&conn)?;
        Ok(Self {
            conn,
            current_year: current_year(),
        })
    }
}

/// Run the lazy migration and pin the LIKE behaviour that `search` relies on.
fn ensure_schema(conn: &Connection) -> Result<()> {
    // LIKE folds ASCII case; pinned here so search never depends on how the
    // engine was built.
    conn.pragma_update(None, "case_sensitive_like", false)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            year INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_parent_directories_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("books.db");

        let catalog = Catalog::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(catalog.count().unwrap(), 0);
    }

    #[test]
    fn reopening_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.db");

        {
            let catalog = Catalog::open(&path).unwrap();
            catalog.create("Dune", "Frank Herbert", 1965).unwrap();
        }

        let catalog = Catalog::open(&path).unwrap();
        let books = catalog.list_all().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }
}
