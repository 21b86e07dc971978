//! Persistence module split across logical submodules.

mod connection;
mod entries;

#[cfg(test)]
mod tests;

pub use connection::{ensure_schema, open_store};
pub use entries::{delete_entry, fetch_entries, insert_entry};
