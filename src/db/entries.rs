use rusqlite::types::Null;
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::models::ShoppingEntry;

/// Retrieve every row in natural storage order. The UI replaces its whole
/// snapshot with the result, so no filtering or sorting happens here.
pub fn fetch_entries(conn: &Connection) -> Result<Vec<ShoppingEntry>, StoreError> {
    let mut stmt = conn
        .prepare("SELECT * from shoplist")
        .map_err(StoreError::Read)?;

    let entries = stmt
        .query_map([], |row| {
            Ok(ShoppingEntry {
                id: row.get(0)?,
                item: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                amount: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        })
        .map_err(StoreError::Read)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Read)?;

    Ok(entries)
}

/// Append a row and echo it back with the id SQLite assigned. Neither field
/// is validated: empty strings are stored as-is.
pub fn insert_entry(
    conn: &Connection,
    item: &str,
    amount: &str,
) -> Result<ShoppingEntry, StoreError> {
    conn.execute(
        "INSERT INTO shoplist VALUES (?, ?, ?)",
        params![Null, item, amount],
    )
    .map_err(StoreError::Write)?;

    Ok(ShoppingEntry {
        id: conn.last_insert_rowid(),
        item: item.to_string(),
        amount: amount.to_string(),
    })
}

/// Remove the row with `id` and return how many rows went away. A missing id
/// yields `Ok(0)` rather than an error.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<usize, StoreError> {
    conn.execute("DELETE FROM shoplist WHERE id=?", params![id])
        .map_err(StoreError::Delete)
}
