//! Credential storage for the generation provider.
//!
//! One injected collaborator owns the API key instead of ad-hoc reads
//! scattered across call sites: read once at startup, explicit set and
//! clear. The file-backed store writes atomically (tempfile + rename) so
//! a crash never leaves a torn credential behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyStoreError {
    #[error("could not determine home directory for key storage")]
    NoHomeDir,

    #[error("key store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// get/set/clear a single credential string.
pub trait KeyStore {
    fn get(&self) -> Result<Option<String>, KeyStoreError>;
    fn set(&self, key: &str) -> Result<(), KeyStoreError>;
    fn clear(&self) -> Result<(), KeyStoreError>;
}

/// Key store backed by a file under the user's config directory.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.config/redmark/api-key`.
    pub fn open_default() -> Result<Self, KeyStoreError> {
        let home = home::home_dir().ok_or(KeyStoreError::NoHomeDir)?;
        Ok(Self::new(home.join(".config").join("redmark").join("api-key")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> KeyStoreError {
        KeyStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl KeyStore for FileKeyStore {
    fn get(&self) -> Result<Option<String>, KeyStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key.to_string()))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn set(&self, key: &str) -> Result<(), KeyStoreError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| {
                self.io_error(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "key path has no parent directory",
                ))
            })?
            .to_path_buf();
        fs::create_dir_all(&parent).map_err(|err| self.io_error(err))?;

        // Tempfile in the same directory so the rename stays on one filesystem.
        let mut temp =
            tempfile::NamedTempFile::new_in(&parent).map_err(|err| self.io_error(err))?;
        temp.write_all(key.as_bytes())
            .map_err(|err| self.io_error(err))?;
        temp.as_file()
            .sync_all()
            .map_err(|err| self.io_error(err))?;
        temp.persist(&self.path)
            .map_err(|err| self.io_error(err.error))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), KeyStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// In-memory store for tests and embedding without persistence.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    key: Mutex<Option<String>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: Mutex::new(Some(key.into())),
        }
    }
}

impl KeyStore for MemoryKeyStore {
    fn get(&self) -> Result<Option<String>, KeyStoreError> {
        Ok(self.key.lock().expect("key store poisoned").clone())
    }

    fn set(&self, key: &str) -> Result<(), KeyStoreError> {
        *self.key.lock().expect("key store poisoned") = Some(key.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), KeyStoreError> {
        *self.key.lock().expect("key store poisoned") = None;
        Ok(())
    }
}
