//! Persistence module split across logical submodules. `connection` owns the
//! [`Catalog`] handle and schema, `books` the CRUD queries, and `export` the
//! text/CSV renderings built on top of them.

mod books;
mod connection;
mod export;

pub use connection::Catalog;
pub use export::{CSV_HEADER, TEXT_HEADER};
