//! Flat-file JSON record store.
//!
//! Each [`Collection`] owns one JSON file. Reads load the whole file;
//! writes replace it through a temporary sibling file and a rename, so a
//! concurrent reader sees either the old or the new content, never a
//! truncated file. Read-modify-write sequences go through
//! [`Collection::modify`], which holds the collection's mutex for the
//! whole cycle.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

/// Failures raised by the storage layer itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {collection}: {source}")]
    Serialize {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One named collection persisted as a single JSON file.
#[derive(Debug)]
pub struct Collection {
    name: &'static str,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Collection {
    pub fn new(name: &'static str, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists at all.
    pub async fn exists(&self) -> Result<bool, StoreError> {
        tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.io_error(source))
    }

    /// Load the full collection.
    ///
    /// A missing file or one holding only whitespace yields `T::default()`.
    /// Anything else must parse, otherwise [`StoreError::Parse`].
    pub async fn read<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(collection = self.name, "Collection file absent, using empty value");
                return Ok(T::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::error!(collection = self.name, error = %source, "Stored collection is malformed");
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Replace the stored collection with `value`.
    ///
    /// Callers that read before writing should use [`Collection::modify`]
    /// instead so the cycle runs under the collection lock.
    pub async fn write<T>(&self, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            collection: self.name,
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|source| self.io_error(source))?;

        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.io_error(source));
        }

        tracing::debug!(collection = self.name, bytes = bytes.len(), "Collection written");
        Ok(())
    }

    /// Read, apply `f`, and write back while holding the collection lock.
    ///
    /// When `f` returns an error nothing is written and the stored file is
    /// left untouched.
    pub async fn modify<T, R, E, F>(&self, f: F) -> Result<R, E>
    where
        T: DeserializeOwned + Serialize + Default,
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut value: T = self.read().await?;
        let out = f(&mut value)?;
        self.write(&value).await?;
        Ok(out)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| self.name.into());
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
