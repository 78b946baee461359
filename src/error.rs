//! Error taxonomy for the catalog store. Everything the store can fail with
//! lands in [`CatalogError`] so the UI can tell a typo in the form apart from
//! a broken database file.

use std::io;

use thiserror::Error;

/// Failures surfaced by [`crate::Catalog`] operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input rejected before touching the database.
    #[error("{0}")]
    Validation(String),

    /// The targeted record no longer exists.
    #[error("Book {0} not found")]
    NotFound(i64),

    #[error("failed to write export file: {0}")]
    Io(#[from] io::Error),

    /// Encoding failures only; file system errors from the writer become
    /// [`CatalogError::Io`].
    #[error("failed to encode CSV: {0}")]
    Csv(#[source] csv::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl CatalogError {
    pub(crate) fn validation<S: Into<String>>(message: S) -> Self {
        CatalogError::Validation(message.into())
    }

    /// True for errors the user can fix by editing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return CatalogError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(err) => CatalogError::Io(err),
            other => CatalogError::Io(io::Error::other(format!("{other:?}"))),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
