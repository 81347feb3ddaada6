//! Record source: loads the raw user batch from a JSON file.
//!
//! Accepts the upstream envelope (`{"users": [...], "total": .., ...}`) or a
//! bare array. The document is checked against `schemas/users.schema.json`
//! before it is deserialized.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::{ValidationError, validator_for};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::Record;

const USERS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/users.schema.json"
));

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Envelope { users: Vec<Record> },
    Bare(Vec<Record>),
}

/// Read, validate and deserialize the records at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    debug!(path = %path.display(), "loading records");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read records {}", path.display()))?;
    let records =
        parse_records(&contents).with_context(|| format!("load records {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "records loaded");
    Ok(records)
}

/// Validate and deserialize a JSON document holding user records.
pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(contents).context("parse json")?;
    validate_schema(&value)?;
    let records = match serde_json::from_value(value).context("deserialize records")? {
        Payload::Envelope { users } => users,
        Payload::Bare(users) => users,
    };
    warn_on_duplicate_ids(&records);
    Ok(records)
}

/// Load records, degrading to an empty batch on failure unless `strict`.
///
/// The table then renders an empty view instead of stale or partial data.
pub fn load_or_empty(path: &Path, strict: bool) -> Result<Vec<Record>> {
    match load_records(path) {
        Ok(records) => Ok(records),
        Err(err) if !strict => {
            warn!(
                path = %path.display(),
                error = %format!("{:#}", err),
                "record source failed; showing empty table"
            );
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

fn validate_schema(value: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(USERS_SCHEMA).context("parse users schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(value) {
        let messages = compiled
            .iter_errors(value)
            .map(|err| format!("{}: {}", schema_location(&err), err.masked()))
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "records schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

/// JSON pointer of the failing value, `/` for the document root.
fn schema_location(err: &ValidationError<'_>) -> String {
    let path = err.instance_path().to_string();
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

fn warn_on_duplicate_ids(records: &[Record]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id) {
            warn!(id = record.id, "duplicate record id in source");
        }
    }
}
