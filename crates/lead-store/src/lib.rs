//! Persistence for imported leads.
//!
//! The import pipeline hands its records to a [`LeadStore`]; the CLI
//! uses the JSON file store, tests and dry runs use the in-memory one.
//! Inserts are all-or-nothing per batch: a duplicate id anywhere in the
//! batch rejects the whole batch before anything is written.

pub mod error;
pub mod json;
pub mod memory;

use lead_model::LeadRecord;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

pub trait LeadStore {
    /// Inserts a batch of records, returning how many were added.
    /// Fails without side effects if any id already exists or repeats
    /// within the batch.
    fn insert_many(&mut self, leads: Vec<LeadRecord>) -> Result<usize, StoreError>;

    /// All stored records, in insertion order.
    fn all(&self) -> Result<Vec<LeadRecord>, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Batch precondition shared by the store implementations.
pub(crate) fn ensure_unique_ids(
    existing: &[LeadRecord],
    incoming: &[LeadRecord],
) -> Result<(), StoreError> {
    for (index, lead) in incoming.iter().enumerate() {
        let repeats_earlier = incoming[..index].iter().any(|other| other.id == lead.id);
        let exists = existing.iter().any(|other| other.id == lead.id);
        if repeats_earlier || exists {
            return Err(StoreError::DuplicateId {
                id: lead.id.clone(),
            });
        }
    }
    Ok(())
}
