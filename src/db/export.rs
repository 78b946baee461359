use std::io::Write;
use std::path::Path;

use log::info;

use super::Catalog;
use crate::error::Result;

/// First line of the plain-text export.
pub const TEXT_HEADER: &str = "List of Books:";
/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 3] = ["Title", "Author", "Year"];

impl Catalog {
    /// Render every book as a `Title/Author/Year` block, blocks separated by a
    /// blank line and preceded by [`TEXT_HEADER`].
    pub fn export_text(&self) -> Result<String> {
        let blocks: Vec<String> = self
            .list_all()?
            .iter()
            .map(|book| {
                format!(
                    "Title: {}\nAuthor: {}\nYear: {}",
                    book.title, book.author, book.year
                )
            })
            .collect();

        Ok(format!("{TEXT_HEADER}\n\n{}", blocks.join("\n\n")))
    }

    /// Write the catalog as CSV to `path`, replacing any existing file.
    /// Returns the number of data rows written.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let writer = csv_writer().from_path(path)?;
        let rows = self.write_csv_rows(writer)?;
        info!("Exported {rows} books to {}", path.display());
        Ok(rows)
    }

    /// Write the catalog as CSV into any byte sink.
    pub fn write_csv<W: Write>(&self, sink: W) -> Result<usize> {
        self.write_csv_rows(csv_writer().from_writer(sink))
    }

    fn write_csv_rows<W: Write>(&self, mut writer: csv::Writer<W>) -> Result<usize> {
        let books = self.list_all()?;

        writer.write_record(CSV_HEADER)?;
        for book in &books {
            writer.write_record([
                book.title.as_str(),
                book.author.as_str(),
                book.year.to_string().as_str(),
            ])?;
        }
        writer.flush()?;

        Ok(books.len())
    }
}

/// Records end in CRLF, as RFC 4180 spells it.
fn csv_writer() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.terminator(csv::Terminator::CRLF);
    builder
}
