//! Flat-file persistence for customer records.
//!
//! The whole database is one JSON document: loaded once at startup and
//! rewritten in full after every successful mutation, mirroring a classic
//! read-modify-write file store. Concurrent access is serialized through an
//! async RwLock, so handlers never observe a half-applied mutation.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

/// On-disk document shape
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Handle to the JSON data file and its in-memory image
pub struct JsonStore {
    path: PathBuf,
    state: RwLock<Database>,
}

impl JsonStore {
    /// Open the data file, starting from an empty database when it does not
    /// exist yet. The file is only created on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let database = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "data file not found, starting empty");
                Database::default()
            }
            Err(err) => return Err(AppError::Storage(err)),
        };

        Ok(Self {
            path,
            state: RwLock::new(database),
        })
    }

    /// Run a read-only closure against the current database snapshot.
    pub async fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Apply a mutation and rewrite the data file. The file is untouched when
    /// the closure fails, so rejected requests never dirty the store.
    pub async fn write<R>(&self, f: impl FnOnce(&mut Database) -> Result<R>) -> Result<R> {
        let mut guard = self.state.write().await;
        let value = f(&mut guard)?;
        self.persist(&guard).await?;
        Ok(value)
    }

    async fn persist(&self, database: &Database) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let raw = serde_json::to_string_pretty(database)?;
        tokio::fs::write(&self.path, raw).await?;
        debug!(path = %self.path.display(), customers = database.customers.len(), "data file written");

        Ok(())
    }
}
