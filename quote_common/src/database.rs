//! JSON file-backed key/value store.
//!
//! `JsonDatabase<T>` keeps a `String -> T` map in memory and mirrors it to a
//! single pretty-printed JSON object on disk. Mutations mark the map dirty;
//! [`JsonDatabase::flush`] writes it back atomically (temp file, `sync_all`,
//! rename). Dropping a dirty database flushes it on a best-effort basis, so the
//! handle behaves like a scoped resource; call [`JsonDatabase::close`] to see
//! the error instead.
//!
//! The map is not synchronized. Share it behind a `Mutex` if needed.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, error};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::QuoteError;
use crate::result::Result;

/// Durable mapping from string keys to values of type `T`.
pub struct JsonDatabase<T: Serialize + DeserializeOwned> {
    path: PathBuf,
    entries: BTreeMap<String, T>,
    dirty: bool,
}

impl<T: Serialize + DeserializeOwned> JsonDatabase<T> {
    /// Open the database at `path`, creating parent directories when needed.
    ///
    /// A missing or empty file yields an empty database. A file that is not a
    /// JSON object of `T` values is reported as [`QuoteError::CorruptDatabase`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| QuoteError::CorruptDatabase {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };
        debug!("Opened {} with {} key(s)", path.display(), entries.len());

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Mutable access to the value under `key`. Marks the database dirty.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let value = self.entries.get_mut(key);
        if value.is_some() {
            self.dirty = true;
        }
        value
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.dirty = true;
        self.entries.insert(key.into(), value)
    }

    /// Whether there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forget pending changes after the caller has restored the in-memory state
    /// to what is on disk.
    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Write pending changes to disk. No-op when nothing changed.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        atomic_write(&self.path, content.as_bytes())?;
        self.dirty = false;
        debug!("Flushed {}", self.path.display());
        Ok(())
    }

    /// Flush and release the database.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

impl<T: Serialize + DeserializeOwned> Drop for JsonDatabase<T> {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            error!("Failed to flush {} on drop: {}", self.path.display(), e);
        }
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| QuoteError::Format(format!("not a file path: {}", path.display())))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));
    {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(data)?;
        f.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}
