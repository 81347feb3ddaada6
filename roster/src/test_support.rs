//! Test-only helpers for constructing records and source fixtures.

use std::borrow::Borrow;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::record::{Address, Company, Gender, Record};

const FIRST_NAMES: [&str; 7] = [
    "Emily",
    "Michael",
    "Sophia",
    "James",
    "Emma",
    "Olivia",
    "Alexander",
];
const STATES: [&str; 4] = ["Mississippi", "Texas", "Alabama", "Ohio"];

/// Create a record with deterministic defaults for the fields tests rarely care about.
pub fn record(id: u64, first_name: &str, age: u32, gender: Gender, state: &str) -> Record {
    Record {
        id,
        first_name: first_name.to_string(),
        maiden_name: String::new(),
        last_name: format!("Last{}", id),
        age,
        gender,
        address: Some(Address {
            city: Some(format!("{} City", first_name)),
            state: Some(state.to_string()),
        }),
        company: Some(Company {
            title: Some("Engineer".to_string()),
        }),
        image: format!("https://example.com/{}.png", id),
    }
}

/// Create a male record with neither `address` nor `company`.
pub fn record_without_address(id: u64, first_name: &str) -> Record {
    Record {
        address: None,
        company: None,
        ..record(id, first_name, 30, Gender::Male, "")
    }
}

/// `count` records with ids `1..=count`, alternating gender, cycling names and
/// states, and ages that repeat so sorts see ties.
pub fn sample_records(count: u64) -> Vec<Record> {
    (1..=count)
        .map(|id| {
            let index = id as usize;
            let gender = if id % 2 == 0 {
                Gender::Female
            } else {
                Gender::Male
            };
            record(
                id,
                FIRST_NAMES[index % FIRST_NAMES.len()],
                20 + (id * 7 % 23) as u32,
                gender,
                STATES[index % STATES.len()],
            )
        })
        .collect()
}

/// Ids of `records`, in order.
pub fn ids<R: Borrow<Record>>(records: &[R]) -> Vec<u64> {
    records
        .iter()
        .map(|record| Borrow::<Record>::borrow(record).id)
        .collect()
}

/// Write `records` as an upstream-shaped `users.json` into a fresh temp dir.
///
/// Returns the dir guard (keep it alive) and the file path.
pub fn users_fixture(records: &[Record]) -> Result<(TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create temp dir")?;
    let path = temp.path().join("users.json");
    let payload = serde_json::json!({
        "users": records,
        "total": records.len(),
        "skip": 0,
        "limit": records.len(),
    });
    fs::write(&path, serde_json::to_string_pretty(&payload)?)
        .with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}
