//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. `Book` is a plain row holder; `BookInput` is the not-yet-trusted triple
//! collected from the form and owns the validation rules shared by create and
//! update.

use std::fmt;

use chrono::{Datelike, Local};

use crate::error::{CatalogError, Result};

/// Oldest publication year the catalog accepts.
pub const MIN_YEAR: i64 = 1900;

/// Current calendar year in local time. Upper bound for `year`.
pub fn current_year() -> i64 {
    i64::from(Local::now().year())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One catalog entry.
pub struct Book {
    /// Primary key assigned by SQLite. The UI only ever reads it back to
    /// target update/delete at the selected row.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Kept as SQLite's 64-bit integer so rows written by other tools always
    /// load, even when their year is out of range.
    pub year: i64,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Title, author and year as submitted by the user, trimmed but not yet
/// checked against the catalog rules.
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub year: i64,
}

impl BookInput {
    pub fn new(title: &str, author: &str, year: i64) -> Self {
        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            year,
        }
    }

    /// Build an input from raw form text. Only the year is interpreted here;
    /// a year that is not an integer is rejected before any other rule runs.
    pub fn parse(title: &str, author: &str, year: &str) -> Result<Self> {
        let year_raw = year.trim();
        if year_raw.is_empty() {
            return Err(CatalogError::validation("All fields must be filled!"));
        }
        let year = year_raw
            .parse::<i64>()
            .map_err(|_| CatalogError::validation("Year must be a valid number!"))?;
        Ok(Self::new(title, author, year))
    }

    /// Check the record invariants against `current_year`.
    pub fn validate(&self, current_year: i64) -> Result<()> {
        if self.title.is_empty() {
            return Err(CatalogError::validation("Title is required."));
        }
        if self.author.is_empty() {
            return Err(CatalogError::validation("Author is required."));
        }
        if !(MIN_YEAR..=current_year).contains(&self.year) {
            return Err(CatalogError::validation(format!(
                "Year must be between {MIN_YEAR} and {current_year}!"
            )));
        }
        Ok(())
    }
}
