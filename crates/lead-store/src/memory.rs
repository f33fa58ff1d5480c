//! In-memory store for tests and dry runs.

use lead_model::LeadRecord;

use crate::error::StoreError;
use crate::{LeadStore, ensure_unique_ids};

#[derive(Debug, Default)]
pub struct MemoryStore {
    leads: Vec<LeadRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadStore for MemoryStore {
    fn insert_many(&mut self, leads: Vec<LeadRecord>) -> Result<usize, StoreError> {
        ensure_unique_ids(&self.leads, &leads)?;
        let added = leads.len();
        self.leads.extend(leads);
        Ok(added)
    }

    fn all(&self) -> Result<Vec<LeadRecord>, StoreError> {
        Ok(self.leads.clone())
    }

    fn len(&self) -> usize {
        self.leads.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use lead_model::{LeadSource, SocialPlatform};

    use super::*;

    fn lead(id: &str, email: &str) -> LeadRecord {
        LeadRecord {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: String::new(),
            email: email.to_string(),
            company: String::new(),
            phone: String::new(),
            notes: String::new(),
            social_profiles: BTreeMap::<SocialPlatform, String>::new(),
            status: "new".to_string(),
            assigned_to: String::new(),
            source: LeadSource::Csv,
        }
    }

    #[test]
    fn inserts_and_reads_back_in_order() {
        let mut store = MemoryStore::new();
        let added = store
            .insert_many(vec![lead("a", "a@x.com"), lead("b", "b@x.com")])
            .unwrap();
        assert_eq!(added, 2);
        let ids: Vec<String> = store.all().unwrap().into_iter().map(|l| l.id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn duplicate_ids_reject_the_whole_batch() {
        let mut store = MemoryStore::new();
        store.insert_many(vec![lead("a", "a@x.com")]).unwrap();

        let err = store
            .insert_many(vec![lead("b", "b@x.com"), lead("a", "again@x.com")])
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { id } if id == "a"));
        // Nothing from the failed batch landed.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn repeats_within_one_batch_are_rejected() {
        let mut store = MemoryStore::new();
        let err = store
            .insert_many(vec![lead("x", "x@x.com"), lead("x", "x2@x.com")])
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { .. }));
        assert!(store.is_empty());
    }
}
