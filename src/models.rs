//! Domain model mirroring the single `shoplist` table. Entries are plain data
//! holders; the store assigns ids and the UI only ever reads them.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the shopping list.
pub struct ShoppingEntry {
    /// Primary key assigned by SQLite on insert. The "Bought" action sends it
    /// back to the store to delete the row.
    pub id: i64,
    /// What to buy.
    pub item: String,
    /// Free-form quantity ("2", "a dozen", ""). Never parsed as a number.
    pub amount: String,
}

impl fmt::Display for ShoppingEntry {
    /// Render the entry the way the list shows it: `item, amount`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.item, self.amount)
    }
}
