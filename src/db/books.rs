use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::Catalog;
use crate::error::{CatalogError, Result};
use crate::models::{Book, BookInput};

const SELECT_BOOKS: &str = "SELECT id, title, author, year FROM books";

impl Catalog {
    /// Validate and insert a new book, returning the stored row with its
    /// freshly assigned id.
    pub fn create(&self, title: &str, author: &str, year: i64) -> Result<Book> {
        self.insert(&BookInput::new(title, author, year))
    }

    /// Same as [`Catalog::create`] for input already gathered by the form.
    pub fn insert(&self, input: &BookInput) -> Result<Book> {
        input.validate(self.current_year)?;

        self.conn.execute(
            "INSERT INTO books (title, author, year) VALUES (?1, ?2, ?3)",
            params![input.title, input.author, input.year],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted book {id}: {}", input.title);
        Ok(Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        })
    }

    /// Every book in insertion order.
    pub fn list_all(&self) -> Result<Vec<Book>> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_BOOKS} ORDER BY id"))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    /// Books whose title or author contains `term`, ignoring ASCII case. An
    /// empty (or all-whitespace) term lists everything.
    pub fn search(&self, term: &str) -> Result<Vec<Book>> {
        let term = term.trim();
        if term.is_empty() {
            return self.list_all();
        }

        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_BOOKS}
             WHERE title LIKE ?1 ESCAPE '\\' OR author LIKE ?1 ESCAPE '\\'
             ORDER BY id"
        ))?;
        let books = stmt
            .query_map([like_pattern(term)], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    pub fn get(&self, id: i64) -> Result<Book> {
        self.conn
            .query_row(
                &format!("{SELECT_BOOKS} WHERE id = ?1"),
                [id],
                book_from_row,
            )
            .optional()?
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Overwrite title, author and year of an existing book. The same rules as
    /// `create` apply, so an update can never store an out-of-range year.
    pub fn update(&self, id: i64, title: &str, author: &str, year: i64) -> Result<Book> {
        self.replace(id, &BookInput::new(title, author, year))
    }

    /// Same as [`Catalog::update`] for input already gathered by the form.
    pub fn replace(&self, id: i64, input: &BookInput) -> Result<Book> {
        input.validate(self.current_year)?;

        let updated = self.conn.execute(
            "UPDATE books SET title = ?1, author = ?2, year = ?3 WHERE id = ?4",
            params![input.title, input.author, input.year, id],
        )?;

        if updated == 0 {
            return Err(CatalogError::NotFound(id));
        }

        debug!("Updated book {id}: {}", input.title);
        Ok(Book {
            id,
            title: input.title.clone(),
            author: input.author.clone(),
            year: input.year,
        })
    }

    /// Permanently remove a book. Ids are never handed out again.
    pub fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;

        if deleted == 0 {
            Err(CatalogError::NotFound(id))
        } else {
            debug!("Deleted book {id}");
            Ok(())
        }
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        year: row.get(3)?,
    })
}

/// Wrap `term` in `%` wildcards, escaping the LIKE metacharacters so the
/// user's text only ever matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.create("Dune", "Herbert", 1965).unwrap();
        catalog.create("Foundation", "Asimov", 1951).unwrap();
        catalog
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn create_assigns_unique_ids_in_insertion_order() {
        let catalog = seeded();
        let third = catalog.create("Neuromancer", "Gibson", 1984).unwrap();

        let books = catalog.list_all().unwrap();
        assert_eq!(titles(&books), ["Dune", "Foundation", "Neuromancer"]);
        assert_eq!(books[2], third);
        assert!(books[0].id < books[1].id && books[1].id < books[2].id);
    }

    #[test]
    fn create_rejects_invalid_input_without_writing() {
        let catalog = Catalog::open_in_memory().unwrap().with_current_year(2024);

        for (title, author, year) in [
            ("", "Herbert", 1965),
            ("Dune", "  ", 1965),
            ("Dune", "Herbert", 1899),
            ("Dune", "Herbert", 2025),
        ] {
            let err = catalog.create(title, author, year).unwrap_err();
            assert!(err.is_validation(), "{title:?}/{author:?}/{year} accepted");
        }

        assert_eq!(catalog.count().unwrap(), 0);
        assert!(catalog.create("Dune", "Herbert", 2024).is_ok());
    }

    #[test]
    fn search_matches_title_or_author_substring() {
        let catalog = seeded();

        assert_eq!(titles(&catalog.search("Herb").unwrap()), ["Dune"]);
        assert_eq!(titles(&catalog.search("a").unwrap()), ["Foundation"]);
        assert_eq!(titles(&catalog.search("und").unwrap()), ["Foundation"]);
        assert!(catalog.search("Tolkien").unwrap().is_empty());
    }

    #[test]
    fn search_ignores_ascii_case() {
        let catalog = seeded();
        assert_eq!(titles(&catalog.search("herb").unwrap()), ["Dune"]);
        assert_eq!(titles(&catalog.search("DUNE").unwrap()), ["Dune"]);
    }

    #[test]
    fn search_is_case_sensitive_beyond_ascii() {
        let catalog = seeded();
        catalog.create("Émile ou la suite", "Rousseau", 1950).unwrap();

        assert!(catalog.search("é").unwrap().is_empty());
        assert_eq!(titles(&catalog.search("É").unwrap()), ["Émile ou la suite"]);
        assert_eq!(titles(&catalog.search("rousseau").unwrap()), ["Émile ou la suite"]);
    }

    #[test]
    fn empty_search_lists_everything() {
        let catalog = seeded();
        assert_eq!(catalog.search("").unwrap(), catalog.list_all().unwrap());
        assert_eq!(catalog.search("   ").unwrap(), catalog.list_all().unwrap());
    }

    #[test]
    fn search_treats_wildcards_literally() {
        let catalog = seeded();
        catalog.create("100% Pure", "Someone", 2001).unwrap();
        catalog.create("snake_case", "Someone", 2002).unwrap();

        assert_eq!(titles(&catalog.search("%").unwrap()), ["100% Pure"]);
        assert_eq!(titles(&catalog.search("_").unwrap()), ["snake_case"]);
    }

    #[test]
    fn update_overwrites_fields_and_keeps_count() {
        let catalog = seeded();
        let dune = catalog.list_all().unwrap()[0].clone();

        let updated = catalog
            .update(dune.id, "Dune Messiah", "Frank Herbert", 1969)
            .unwrap();
        assert_eq!(updated.id, dune.id);
        assert_eq!(catalog.get(dune.id).unwrap(), updated);
        assert_eq!(catalog.count().unwrap(), 2);
    }

    #[test]
    fn update_validates_like_create() {
        let catalog = seeded();
        let dune = catalog.list_all().unwrap()[0].clone();

        assert!(catalog.update(dune.id, "Dune", "Herbert", 1800).unwrap_err().is_validation());
        assert!(catalog.update(dune.id, "", "Herbert", 1965).unwrap_err().is_validation());
        assert_eq!(catalog.get(dune.id).unwrap(), dune);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let catalog = seeded();
        let err = catalog.update(999, "X", "Y", 2000).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(999)));
    }

    #[test]
    fn delete_removes_once() {
        let catalog = seeded();
        let dune = catalog.list_all().unwrap()[0].clone();

        catalog.delete(dune.id).unwrap();
        assert_eq!(titles(&catalog.list_all().unwrap()), ["Foundation"]);

        let err = catalog.delete(dune.id).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == dune.id));
        assert!(matches!(catalog.get(dune.id), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let catalog = seeded();
        let foundation = catalog.list_all().unwrap()[1].clone();
        catalog.delete(foundation.id).unwrap();

        let next = catalog.create("Hyperion", "Simmons", 1989).unwrap();
        assert!(next.id > foundation.id);
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("abc"), "%abc%");
        assert_eq!(like_pattern("50%_\\"), "%50\\%\\_\\\\%");
    }
}
