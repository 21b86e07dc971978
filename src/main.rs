//! Binary entry point: resolve the data directory, start file logging, open
//! the store, and drive the Ratatui event loop until the user exits.
use shopping_list::{logging, run_app, App, AppPaths, ShoppingList};

/// A store that cannot be opened is not fatal: the list starts empty and the
/// failure lands in the log. Only terminal or home-directory problems bubble
/// up here.
fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    logging::init(&paths.log_file)?;
    tracing::info!(data_dir = %paths.data_dir.display(), "starting shopping list");

    let list = ShoppingList::open(&paths.database);
    let mut app = App::new(list);
    run_app(&mut app)
}
