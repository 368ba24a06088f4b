use std::fs;

use chrono::NaiveDate;
use expense_core::{
    ledger::{Category, Transaction, TransactionKind},
    storage::{JsonStorage, StorageBackend},
};
use tempfile::tempdir;

fn sample_entries() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            kind: TransactionKind::Expense,
            amount: "50".into(),
            category: Category::Food,
            description: "weekly shop".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        },
        Transaction {
            id: 2,
            kind: TransactionKind::Income,
            amount: "200".into(),
            category: Category::Salary,
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        },
        Transaction {
            id: 3,
            kind: TransactionKind::Expense,
            amount: "12.75".into(),
            category: Category::Entertainment,
            description: "cinema".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        },
    ]
}

#[test]
fn round_trip_is_order_preserving_and_field_exact() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let entries = sample_entries();
    storage.save(&entries).expect("save entries");
    assert_eq!(storage.load(), entries);
}

#[test]
fn invalid_json_loads_as_empty_without_panicking() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(storage.store_path(), "[{\"id\": oops").unwrap();

    assert!(storage.load().is_empty());
}

#[test]
fn wrong_shape_loads_as_empty() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();
    fs::write(storage.store_path(), "{\"transactions\": []}").unwrap();

    assert!(storage.load().is_empty());
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    storage.save(&sample_entries()).expect("initial save");
    let original = fs::read_to_string(storage.store_path()).expect("read original file");

    // Create a directory that collides with the temp file name to force the
    // staged write to fail.
    let tmp_path = storage.store_path().with_extension("json.tmp");
    fs::create_dir_all(&tmp_path).unwrap();

    let mut entries = sample_entries();
    entries.push(Transaction {
        id: 4,
        kind: TransactionKind::Expense,
        amount: "99".into(),
        category: Category::Others,
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    });
    let result = storage.save(&entries);
    assert!(result.is_err(), "staged write into a directory must fail");

    let current = fs::read_to_string(storage.store_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the existing file"
    );
}
