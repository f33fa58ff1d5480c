//! JSON file store: a flat array of lead records on disk.
//!
//! Saves are atomic (write a temp file in the same directory, then
//! rename over the target) so a crash mid-save never corrupts the
//! store. The whole file is rewritten on each insert; lead books at
//! this scale are small.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lead_model::LeadRecord;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::{LeadStore, ensure_unique_ids};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    leads: Vec<LeadRecord>,
}

impl JsonFileStore {
    /// Opens a store, loading the backing file if it exists. A missing
    /// file is an empty store; the file appears on first insert.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let leads = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Deserialize {
                    path: path.clone(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };
        debug!(path = %path.display(), leads = leads.len(), "opened lead store");
        Ok(Self { path, leads })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, leads: &[LeadRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(leads)
            .map_err(|e| StoreError::Serialize { source: e })?;

        let temp_path = self.path.with_extension("json.tmp");

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(json.as_bytes()).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::AtomicWriteFailed {
            temp_path,
            target_path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

impl LeadStore for JsonFileStore {
    fn insert_many(&mut self, leads: Vec<LeadRecord>) -> Result<usize, StoreError> {
        ensure_unique_ids(&self.leads, &leads)?;

        // Commit to memory only after the file write succeeds.
        let mut next = self.leads.clone();
        next.extend(leads);
        self.save(&next)?;

        let added = next.len() - self.leads.len();
        self.leads = next;
        info!(
            path = %self.path.display(),
            added,
            total = self.leads.len(),
            "saved lead store"
        );
        Ok(added)
    }

    fn all(&self) -> Result<Vec<LeadRecord>, StoreError> {
        Ok(self.leads.clone())
    }

    fn len(&self) -> usize {
        self.leads.len()
    }
}
