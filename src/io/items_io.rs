use std::fs;
use std::path::Path;

use crate::model::{AppConfig, ItemStore};

use super::config_io::LoadError;

/// Read item labels from a text file, one per line. Surrounding whitespace
/// is trimmed and blank lines are skipped.
pub fn read_labels(path: &Path) -> Result<Vec<String>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// The starting list: the item file when one is given, numbered labels
/// otherwise.
pub fn initial_store(items: Option<&Path>, config: &AppConfig) -> Result<ItemStore, LoadError> {
    match items {
        Some(path) => Ok(ItemStore::from_labels(read_labels(path)?)),
        None => Ok(ItemStore::numbered(config.list.initial_count)),
    }
}
