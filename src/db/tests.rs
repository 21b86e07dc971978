use std::collections::HashSet;

use rusqlite::Connection;

use super::*;
use crate::error::StoreError;

fn memory_store() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    conn
}

// ── Schema ────────────────────────────────────────────────────

#[test]
fn test_fresh_store_is_empty() {
    let conn = memory_store();
    assert!(fetch_entries(&conn).unwrap().is_empty());
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let conn = memory_store();
    insert_entry(&conn, "Bread", "1").unwrap();
    ensure_schema(&conn).unwrap();
    assert_eq!(fetch_entries(&conn).unwrap().len(), 1);
}

#[test]
fn test_open_store_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("shoppingdb.sqlite");

    let conn = open_store(&path).unwrap();
    assert!(path.exists());
    assert!(fetch_entries(&conn).unwrap().is_empty());
}

#[test]
fn test_rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shoppingdb.sqlite");

    {
        let conn = open_store(&path).unwrap();
        insert_entry(&conn, "Eggs", "12").unwrap();
    }

    let conn = open_store(&path).unwrap();
    let entries = fetch_entries(&conn).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].item, "Eggs");
    assert_eq!(entries[0].amount, "12");
}

#[test]
fn test_open_store_under_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();

    let err = open_store(&blocker.join("shoppingdb.sqlite")).unwrap_err();
    assert!(matches!(err, StoreError::DataDir { .. }));
    assert!(err.is_unavailable());
}

// ── Insert / list ─────────────────────────────────────────────

#[test]
fn test_insert_then_list() {
    let conn = memory_store();
    let created = insert_entry(&conn, "Milk", "2").unwrap();

    let entries = fetch_entries(&conn).unwrap();
    assert_eq!(entries, vec![created.clone()]);
    assert_eq!(created.item, "Milk");
    assert_eq!(created.amount, "2");
}

#[test]
fn test_insert_accepts_empty_and_free_form_values() {
    let conn = memory_store();
    insert_entry(&conn, "", "").unwrap();
    insert_entry(&conn, "Apples", "a few").unwrap();

    let entries = fetch_entries(&conn).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].item, "");
    assert_eq!(entries[1].amount, "a few");
}

#[test]
fn test_many_inserts_get_distinct_ids() {
    let conn = memory_store();
    for n in 0..25 {
        insert_entry(&conn, &format!("item {n}"), &n.to_string()).unwrap();
    }

    let entries = fetch_entries(&conn).unwrap();
    assert_eq!(entries.len(), 25);
    let ids: HashSet<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), 25);
}

#[test]
fn test_null_columns_read_as_empty_strings() {
    let conn = memory_store();
    conn.execute("INSERT INTO shoplist (id, item, amount) VALUES (7, NULL, NULL)", [])
        .unwrap();

    let entries = fetch_entries(&conn).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 7);
    assert_eq!(entries[0].item, "");
    assert_eq!(entries[0].amount, "");
}

#[test]
fn test_fetch_without_table_is_a_read_error() {
    let conn = Connection::open_in_memory().unwrap();
    let err = fetch_entries(&conn).unwrap_err();
    assert!(matches!(err, StoreError::Read(_)));
}

#[test]
fn test_insert_without_table_is_a_write_error() {
    let conn = Connection::open_in_memory().unwrap();
    let err = insert_entry(&conn, "Milk", "2").unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
}

// ── Delete ────────────────────────────────────────────────────

#[test]
fn test_delete_removes_only_that_row() {
    let conn = memory_store();
    let milk = insert_entry(&conn, "Milk", "2").unwrap();
    let bread = insert_entry(&conn, "Bread", "1").unwrap();
    let eggs = insert_entry(&conn, "Eggs", "12").unwrap();

    assert_eq!(delete_entry(&conn, bread.id).unwrap(), 1);
    assert_eq!(fetch_entries(&conn).unwrap(), vec![milk, eggs]);
}

#[test]
fn test_delete_missing_id_is_a_no_op() {
    let conn = memory_store();
    let milk = insert_entry(&conn, "Milk", "2").unwrap();

    assert_eq!(delete_entry(&conn, milk.id + 100).unwrap(), 0);
    assert_eq!(fetch_entries(&conn).unwrap(), vec![milk]);
}

#[test]
fn test_delete_twice_matches_delete_once() {
    let conn = memory_store();
    let milk = insert_entry(&conn, "Milk", "2").unwrap();
    let bread = insert_entry(&conn, "Bread", "1").unwrap();

    assert_eq!(delete_entry(&conn, milk.id).unwrap(), 1);
    let after_once = fetch_entries(&conn).unwrap();
    assert_eq!(delete_entry(&conn, milk.id).unwrap(), 0);
    let after_twice = fetch_entries(&conn).unwrap();

    assert_eq!(after_once, after_twice);
    assert_eq!(after_twice, vec![bread]);
}

#[test]
fn test_delete_without_table_is_a_delete_error() {
    let conn = Connection::open_in_memory().unwrap();
    let err = delete_entry(&conn, 1).unwrap_err();
    assert!(matches!(err, StoreError::Delete(_)));
}
