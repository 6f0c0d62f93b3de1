//! Integer key-value store backing the high score.
//!
//! The whole store is one small file: a [`file_header`](crate::file_header)
//! followed by the bitcode-encoded entry list. Writes replace the file
//! atomically.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::atomic_write::atomic_write;
use crate::file_header::{unwrap_header, wrap_with_header};
use crate::save_error::SaveError;

/// Key the best finished run is stored under.
pub const HIGHSCORE_KEY: &str = "Highscore";

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct StoreEntry {
    pub key: String,
    pub value: i64,
}

#[derive(Debug, Default, Encode, Decode)]
struct StoreData {
    entries: Vec<StoreEntry>,
}

#[derive(Debug, Default)]
pub struct KeyValueStore {
    /// `None` keeps everything in memory.
    path: Option<PathBuf>,
    values: BTreeMap<String, i64>,
}

impl KeyValueStore {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// An empty store that will be written to `path` on [`flush`](Self::flush).
    pub fn empty_at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            values: BTreeMap::new(),
        }
    }

    /// Read the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SaveError> {
        let path = path.into();
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::empty_at(path));
            }
            Err(e) => return Err(e.into()),
        };

        let payload = unwrap_header(&bytes)?;
        let data: StoreData = bitcode::decode(payload)?;
        Ok(Self {
            path: Some(path),
            values: data
                .entries
                .into_iter()
                .map(|entry| (entry.key, entry.value))
                .collect(),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Stored value, or 0 when the key was never written.
    pub fn get_int(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_owned(), value);
    }

    /// Entries in key order.
    pub fn entries(&self) -> Vec<StoreEntry> {
        self.values
            .iter()
            .map(|(key, value)| StoreEntry {
                key: key.clone(),
                value: *value,
            })
            .collect()
    }

    /// The bytes [`flush`](Self::flush) writes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let data = StoreData {
            entries: self.entries(),
        };
        wrap_with_header(&bitcode::encode(&data))
    }

    /// Persist the store. No-op for in-memory stores.
    pub fn flush(&self) -> Result<(), SaveError> {
        match &self.path {
            Some(path) => Ok(atomic_write(path, &self.to_bytes())?),
            None => Ok(()),
        }
    }
}
