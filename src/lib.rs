//! Core library surface for the Book Catalog TUI.
//!
//! The store ([`Catalog`]) is usable on its own; the `ui` module layers the
//! terminal front-end on top of it and the binary only wires the two together.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::AppConfig;
pub use db::Catalog;
pub use error::CatalogError;
pub use models::{Book, BookInput};
pub use ui::{run_app, App};
