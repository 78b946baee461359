use std::collections::HashSet;

use book_catalog::models::{current_year, MIN_YEAR};
use book_catalog::{App, Catalog, CatalogError};

fn triples(catalog: &Catalog) -> Vec<(String, String, i64)> {
    let mut rows: Vec<_> = catalog
        .list_all()
        .unwrap()
        .into_iter()
        .map(|b| (b.title, b.author, b.year))
        .collect();
    rows.sort();
    rows
}

#[test]
fn every_valid_create_is_listed_once_with_a_fresh_id() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("books.db")).unwrap();
    let now = current_year();

    let mut ids = HashSet::new();
    for (i, year) in [MIN_YEAR, 1951, 1999, now].into_iter().enumerate() {
        let title = format!("Book {i}");
        let book = catalog.create(&title, "Author", year).unwrap();
        assert!(ids.insert(book.id), "id {} reused", book.id);

        let matches: Vec<_> = catalog
            .list_all()
            .unwrap()
            .into_iter()
            .filter(|b| b.title == title && b.year == year)
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, book.id);
    }
}

#[test]
fn rejected_creates_leave_the_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("books.db")).unwrap();
    catalog.create("Dune", "Herbert", 1965).unwrap();
    let before = triples(&catalog);

    let now = current_year();
    for (title, author, year) in [
        ("", "Author", 2000),
        ("Title", "", 2000),
        ("Title", "Author", MIN_YEAR - 1),
        ("Title", "Author", now + 1),
    ] {
        assert!(matches!(
            catalog.create(title, author, year),
            Err(CatalogError::Validation(_))
        ));
    }

    assert_eq!(triples(&catalog), before);
}

#[test]
fn csv_export_round_trips_through_a_reader() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path().join("books.db")).unwrap();
    catalog.create("Dune", "Herbert", 1965).unwrap();
    catalog.create("Foundation", "Asimov", 1951).unwrap();
    catalog
        .create("Good Omens, or: \"Nice\"", "Pratchett, Gaiman", 1990)
        .unwrap();
    catalog.create("Line\nBreak", "Someone", 2001).unwrap();

    let path = dir.path().join("books.csv");
    let written = catalog.export_csv(&path).unwrap();
    assert_eq!(written, 4);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["Title", "Author", "Year"]);

    let mut exported: Vec<(String, String, i64)> = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (
                record[0].to_string(),
                record[1].to_string(),
                record[2].parse().unwrap(),
            )
        })
        .collect();
    exported.sort();

    assert_eq!(exported, triples(&catalog));
}

#[test]
fn csv_export_into_missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open_in_memory().unwrap();
    catalog.create("Dune", "Herbert", 1965).unwrap();

    let err = catalog
        .export_csv(dir.path().join("missing").join("books.csv"))
        .unwrap_err();
    match err {
        CatalogError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn update_and_delete_report_missing_ids() {
    let catalog = Catalog::open_in_memory().unwrap();
    let dune = catalog.create("Dune", "Herbert", 1965).unwrap();

    catalog.delete(dune.id).unwrap();
    assert!(matches!(
        catalog.update(dune.id, "Dune", "Herbert", 1965),
        Err(CatalogError::NotFound(id)) if id == dune.id
    ));
    assert!(matches!(
        catalog.delete(dune.id),
        Err(CatalogError::NotFound(_))
    ));
    assert_eq!(catalog.count().unwrap(), 0);
}

#[test]
fn rows_written_by_other_tools_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                year INTEGER NOT NULL
            );
            INSERT INTO books (title, author, year) VALUES ('Dune', 'Herbert', 1965);
            INSERT INTO books (title, author, year) VALUES ('Typo', 'X', 99999999999);",
        )
        .unwrap();
    }

    let catalog = Catalog::open(&path).unwrap();
    let books = catalog.list_all().unwrap();
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].year, 99_999_999_999);
    assert!(catalog
        .export_text()
        .unwrap()
        .contains("Year: 99999999999"));

    let app = App::new(catalog, dir.path().join("books.csv")).unwrap();
    assert_eq!(app.catalog().count().unwrap(), 2);
}
