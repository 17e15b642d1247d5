// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON-file persistence for the data directory.
//!
//! Each record is stored as a single JSON file. Writes go through a
//! temporary file followed by a rename, so a reader never observes a
//! partially written record.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use super::StoragePaths;

/// Error type for storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Entity not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Entity already exists
    #[error("already exists: {0}")]
    AlreadyExists(String),
    /// Storage not initialized
    #[error("storage not initialized")]
    NotInitialized,
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(e.to_string())
        } else {
            StorageError::Io(e)
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// File-backed storage manager for the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    paths: StoragePaths,
    initialized: bool,
}

impl FileStorage {
    /// Create a new FileStorage instance.
    ///
    /// Does NOT create the directory structure. Call `initialize()` first.
    pub fn new(paths: StoragePaths) -> Self {
        Self {
            paths,
            initialized: false,
        }
    }

    /// Get the storage paths.
    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }

    /// Initialize the storage directory structure.
    ///
    /// Safe to call multiple times (idempotent).
    pub fn initialize(&mut self) -> StorageResult<()> {
        fs::create_dir_all(self.paths.accounts_dir())?;
        self.initialized = true;
        Ok(())
    }

    /// Read a JSON file and deserialize it.
    pub fn read_json<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> StorageResult<T> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let value = serde_json::from_reader(reader)?;
        Ok(value)
    }

    /// Write a JSON file (atomic write via rename).
    pub fn write_json<T: Serialize>(&self, path: impl AsRef<Path>, value: &T) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("tmp");
        {
            let file = File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }

        fs::rename(&temp_path, path)?;
        Ok(())
    }

    /// Check if a file exists.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().exists()
    }

    /// Delete a file.
    pub fn delete(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }
        fs::remove_file(path.as_ref())?;
        Ok(())
    }

    /// List the stems of all files with the given extension in a directory.
    ///
    /// Returns an empty list when the directory does not exist.
    pub fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> StorageResult<Vec<String>> {
        if !self.initialized {
            return Err(StorageError::NotInitialized);
        }

        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut stems = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(extension) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }

        Ok(stems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Record {
        name: String,
        value: i64,
    }

    fn test_storage() -> (FileStorage, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let mut storage = FileStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("initialize storage");
        (storage, dir)
    }

    #[test]
    fn uninitialized_storage_rejects_operations() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(StoragePaths::new(dir.path()));

        let result: StorageResult<Record> = storage.read_json(dir.path().join("x.json"));
        assert!(matches!(result, Err(StorageError::NotInitialized)));
    }

    #[test]
    fn write_and_read_round_trip() {
        let (storage, dir) = test_storage();
        let path = dir.path().join("record.json");
        let record = Record {
            name: "alpha".into(),
            value: 42,
        };

        storage.write_json(&path, &record).unwrap();
        let loaded: Record = storage.read_json(&path).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let (storage, dir) = test_storage();
        let result: StorageResult<Record> = storage.read_json(dir.path().join("missing.json"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn delete_removes_file() {
        let (storage, dir) = test_storage();
        let path = dir.path().join("gone.json");
        storage
            .write_json(
                &path,
                &Record {
                    name: "x".into(),
                    value: 1,
                },
            )
            .unwrap();

        storage.delete(&path).unwrap();
        assert!(!storage.exists(&path));
    }

    #[test]
    fn list_files_returns_stems_for_extension() {
        let (storage, dir) = test_storage();
        for name in ["a", "b"] {
            storage
                .write_json(
                    dir.path().join(format!("{name}.json")),
                    &Record {
                        name: name.into(),
                        value: 0,
                    },
                )
                .unwrap();
        }
        fs::write(dir.path().join("ignored.txt"), b"nope").unwrap();

        let mut stems = storage.list_files(dir.path(), "json").unwrap();
        stems.sort();
        assert_eq!(stems, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn list_files_missing_dir_is_empty() {
        let (storage, dir) = test_storage();
        let stems = storage
            .list_files(dir.path().join("nope"), "json")
            .unwrap();
        assert!(stems.is_empty());
    }
}
