//! Ratatui front-end for the book catalog: a Books tab with search and an
//! add/update/delete form, and an Export tab for the text and CSV exports.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
