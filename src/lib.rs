//! Core library surface for the shopping list TUI.
//!
//! The binary only wires these pieces together; tests drive the store and the
//! view-model directly.
pub mod config;
pub mod db;
pub mod error;
pub mod list;
pub mod logging;
pub mod models;
pub mod ui;

/// Persistence entry points: open the SQLite file and run the four statements.
pub use db::{delete_entry, ensure_schema, fetch_entries, insert_entry, open_store};

pub use config::AppPaths;
pub use error::StoreError;
pub use list::{InputField, ShoppingList};
pub use models::ShoppingEntry;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
