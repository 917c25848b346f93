// ABOUTME: JSON-file-backed key-value store and dated-file export for stats records.
// ABOUTME: Mirrors the popup's local-storage key and blog-stats-YYYY-MM-DD.json export naming.

//! Persistence boundary.
//!
//! The presenter keeps the last extracted record in a local key-value store
//! under one well-known key, and can export the same JSON shape to a file
//! named with the current date. Writes go through a temp file and rename so
//! a crashed writer never leaves a torn store behind.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};

use crate::error::StatsError;
use crate::record::StatsRecord;

/// The well-known store key for the last extracted record.
pub const LAST_RECORD_KEY: &str = "blogStats";

/// A JSON-file-backed key-value store.
///
/// A missing file reads as an empty store; every write persists the whole
/// map atomically.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Creates a store over the given file path. The file is created lazily
    /// on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load_map(&self) -> Result<Map<String, Value>, StatsError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_map(&self, map: &Map<String, Value>) -> Result<(), StatsError> {
        let json = serde_json::to_string_pretty(map)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Reads a value by key, `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<Value>, StatsError> {
        Ok(self.load_map()?.get(key).cloned())
    }

    /// Writes a value under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: Value) -> Result<(), StatsError> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value);
        self.save_map(&map)
    }

    /// Persists a record under [`LAST_RECORD_KEY`].
    pub fn save_record(&self, record: &StatsRecord) -> Result<(), StatsError> {
        self.set(LAST_RECORD_KEY, serde_json::to_value(record)?)
    }

    /// Loads the record stored under [`LAST_RECORD_KEY`], `None` when absent.
    pub fn load_record(&self) -> Result<Option<StatsRecord>, StatsError> {
        match self.get(LAST_RECORD_KEY)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}

/// Export file name for a given date: `blog-stats-YYYY-MM-DD.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("blog-stats-{}.json", date.format("%Y-%m-%d"))
}

/// Writes the record as pretty JSON to `dir`, named with the current local
/// date, and returns the written path.
pub fn export_record(record: &StatsRecord, dir: &Path) -> Result<PathBuf, StatsError> {
    let path = dir.join(export_file_name(Local::now().date_naive()));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_record() -> StatsRecord {
        let mut record = StatsRecord::empty(Utc::now());
        record.today = 3410;
        record.total = 120_000;
        record
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::new(dir.path().join("store.json"));
        assert!(store.get("blogStats").unwrap().is_none());
        assert!(store.load_record().unwrap().is_none());
    }

    #[test]
    fn record_round_trips_through_store() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::new(dir.path().join("store.json"));

        let record = sample_record();
        store.save_record(&record).unwrap();

        let loaded = store.load_record().unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn set_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::new(dir.path().join("store.json"));

        store.set("k", serde_json::json!(1)).unwrap();
        store.set("k", serde_json::json!(2)).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(serde_json::json!(2)));
    }

    #[test]
    fn other_keys_survive_record_saves() {
        let dir = TempDir::new().unwrap();
        let store = StatsStore::new(dir.path().join("store.json"));

        store.set("settings", serde_json::json!({"lang": "ko"})).unwrap();
        store.save_record(&sample_record()).unwrap();
        assert_eq!(
            store.get("settings").unwrap(),
            Some(serde_json::json!({"lang": "ko"}))
        );
    }

    #[test]
    fn export_writes_dated_file() {
        let dir = TempDir::new().unwrap();
        let path = export_record(&sample_record(), dir.path()).unwrap();

        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("blog-stats-"), "got: {}", name);
        assert!(name.ends_with(".json"), "got: {}", name);

        let content = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["today"], 3410);
    }

    #[test]
    fn export_file_name_format() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "blog-stats-2025-03-09.json");
    }
}
