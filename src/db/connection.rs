use std::fs;
use std::path::Path;

use rusqlite::Connection;

use crate::error::StoreError;

/// Open (creating if needed) the SQLite file at `path` and make sure the
/// `shoplist` table exists.
pub fn open_store(path: &Path) -> Result<Connection, StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::DataDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(path).map_err(StoreError::Open)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Idempotent table creation; safe to run on every startup.
pub fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS shoplist (id INTEGER PRIMARY KEY NOT NULL, item TEXT, amount TEXT);",
    )
    .map_err(StoreError::Schema)
}
