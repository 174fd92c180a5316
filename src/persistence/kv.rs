use super::files::{atomic_write, read_file};
use std::path::{Path, PathBuf};
#[cfg(test)]
use std::{cell::{Cell, RefCell}, collections::HashMap, rc::Rc};
use thiserror::Error;

/// Key holding the serialized task collection
pub const TODOS_KEY: &str = "todos";

/// Key holding the display mode ("light" or "dark")
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Durable string-to-string storage addressed by fixed keys
pub trait KeyValueStore {
    /// Read a value; a missing key is `Ok(None)`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as a file of the same name inside a directory
#[derive(Debug, Clone)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        read_file(&path).map_err(|source| StorageError::Read { path, source })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value).map_err(|source| StorageError::Write { path, source })
    }
}

/// In-memory store; clones share the same entries and write counter
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

#[cfg(test)]
impl MemoryKv {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let kv = Self::default();
        kv.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        kv
    }

    /// Number of `set` calls made so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
