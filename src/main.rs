//! Binary entry point: resolve file locations, start logging, open the catalog
//! once, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use book_catalog::{logging, run_app, App, AppConfig, Catalog};
use log::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::resolve();
    if let Err(err) = logging::init_file_logger(&config.log_path) {
        eprintln!("warning: logging disabled: {err:#}");
    }

    let catalog = Catalog::open(&config.database_path).with_context(|| {
        format!(
            "failed to open catalog at {}",
            config.database_path.display()
        )
    })?;

    let mut app = App::new(catalog, config.default_csv_path)?;
    let result = run_app(&mut app);
    info!("Session ended");
    result
}
