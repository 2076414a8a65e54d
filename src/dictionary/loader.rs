//! Dataset loading.
//!
//! The dataset is a JSON array of `{"word": ..., "meaning": ...}` objects.
//! Rows that are not objects, lack either field, carry a non-string value or
//! are blank after trimming are dropped with a warning rather than failing
//! the whole load.

use std::path::Path;

use serde_json::Value;

use crate::dictionary::entry::DictionaryEntry;
use crate::error::{Result, RuyaError};

/// Load and clean the dataset at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DictionaryEntry>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RuyaError::DatasetNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        RuyaError::dataset(format!("Failed to read '{}': {}", path.display(), e))
    })?;

    let entries = parse_dataset(&content)?;
    log::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse and clean an in-memory JSON dataset.
pub fn parse_dataset(content: &str) -> Result<Vec<DictionaryEntry>> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| RuyaError::dataset(format!("Invalid dataset JSON: {e}")))?;

    let Value::Array(rows) = value else {
        return Err(RuyaError::dataset("Dataset must be a JSON array"));
    };

    let total = rows.len();
    let entries: Vec<DictionaryEntry> = rows.iter().filter_map(clean_row).collect();

    let dropped = total - entries.len();
    if dropped > 0 {
        log::warn!("dropped {dropped} malformed dataset rows out of {total}");
    }

    Ok(entries)
}

fn clean_row(row: &Value) -> Option<DictionaryEntry> {
    let word = row.get("word")?.as_str()?.trim();
    let meaning = row.get("meaning")?.as_str()?.trim();

    if word.is_empty() || meaning.is_empty() {
        return None;
    }

    Some(DictionaryEntry::new(word, meaning))
}
