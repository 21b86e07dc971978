//! View-model behind the single screen: the two input buffers, the snapshot
//! of rows, and the store handle. Store failures never escape this type. Each
//! one is logged, swallowed, and kept as `last_failure` so the footer can
//! mention it.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, error, info};

use crate::db::{delete_entry, ensure_schema, fetch_entries, insert_entry, open_store};
use crate::error::StoreError;
use crate::models::ShoppingEntry;


/// The two free-text inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputField {
    Item,
    Amount,
}

pub struct ShoppingList {
    conn: Option<Connection>,
    item: String,
    amount: String,
    entries: Vec<ShoppingEntry>,
    last_failure: Option<StoreError>,
}

impl ShoppingList {
    /// Open the database file and load the snapshot. When the store cannot be
    /// opened the list starts empty and stays unavailable for the session.
    pub fn open(path: &Path) -> Self {
        match open_store(path) {
            Ok(conn) => {
                info!(path = %path.display(), "opened shopping list database");
                Self::ready(conn)
            }
            Err(err) => {
                let mut list = Self::unavailable();
                list.record_failure("Could not open database", err);
                list
            }
        }
    }

    /// Wrap an already open connection, creating the table if it is missing.
    pub fn with_connection(conn: Connection) -> Self {
        match ensure_schema(&conn) {
            Ok(()) => Self::ready(conn),
            Err(err) => {
                let mut list = Self::unavailable();
                list.record_failure("Could not open database", err);
                list
            }
        }
    }

    /// A list with no backing store. Every operation fails and is logged.
    pub fn unavailable() -> Self {
        Self {
            conn: None,
            item: String::new(),
            amount: String::new(),
            entries: Vec::new(),
            last_failure: None,
        }
    }

    fn ready(conn: Connection) -> Self {
        let mut list = Self::unavailable();
        list.conn = Some(conn);
        list.refresh();
        list
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    pub fn entries(&self) -> &[ShoppingEntry] {
        &self.entries
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::Item => &self.item,
            InputField::Amount => &self.amount,
        }
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Item => &mut self.item,
            InputField::Amount => &mut self.amount,
        }
    }

    pub fn set_item(&mut self, item: impl Into<String>) {
        self.item = item.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    /// The most recent store failure, cleared by the next successful call.
    pub fn last_failure(&self) -> Option<&StoreError> {
        self.last_failure.as_ref()
    }

    /// Re-read every row. On failure the previous snapshot stays visible.
    pub fn refresh(&mut self) -> bool {
        match self.connection().and_then(fetch_entries) {
            Ok(entries) => {
                self.entries = entries;
                self.last_failure = None;
                true
            }
            Err(err) => {
                self.record_failure("Could not get items", err);
                false
            }
        }
    }

    /// Insert the current inputs as a new row. On success the list is
    /// re-read and both inputs are cleared; on failure the inputs are kept so
    /// nothing the user typed is lost.
    pub fn add(&mut self) -> bool {
        let inserted = self
            .connection()
            .and_then(|conn| insert_entry(conn, &self.item, &self.amount));

        match inserted {
            Ok(entry) => {
                debug!(id = entry.id, "added item");
                self.last_failure = None;
                self.refresh();
                self.clear_inputs();
                true
            }
            Err(err) => {
                self.record_failure("Could not add item", err);
                false
            }
        }
    }

    /// Delete the row with `id`. Unknown ids are a no-op.
    pub fn mark_bought(&mut self, id: i64) -> bool {
        debug!(id, "deleteItem");
        match self.connection().and_then(|conn| delete_entry(conn, id)) {
            Ok(removed) => {
                if removed == 0 {
                    debug!(id, "no row to delete");
                }
                self.last_failure = None;
                self.refresh();
                true
            }
            Err(err) => {
                self.record_failure("Could not delete item", err);
                false
            }
        }
    }

    pub fn clear_inputs(&mut self) {
        self.item.clear();
        self.amount.clear();
    }

    fn connection(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::NotConnected)
    }

    fn record_failure(&mut self, message: &str, err: StoreError) {
        error!(error = %err.describe(), "{message}");
        self.last_failure = Some(err);
    }
}
