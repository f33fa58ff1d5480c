//! Working mapping state for the import review step.
//!
//! Inference produces a first guess; the user can re-point or clear any
//! header before the import runs. This module tracks that working set
//! and which entries came from inference versus the user.

use std::collections::BTreeMap;

use lead_model::{FieldMapping, LeadField};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MapError;
use crate::infer::infer_mapping;

/// How a mapping entry came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingOrigin {
    Inferred,
    Manual,
}

/// A header's current target plus where that choice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    pub field: LeadField,
    pub origin: MappingOrigin,
}

/// The mapping under review for one parsed table.
///
/// Keys are header names; a header with no entry is unmapped and its
/// column will be dropped by the import. Duplicate header names share a
/// single entry (position-level tie-breaking happens in the import
/// pipeline, not here).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingState {
    headers: Vec<String>,
    entries: BTreeMap<String, MappingEntry>,
}

impl MappingState {
    /// Seeds the state from inference over the table's headers.
    #[must_use]
    pub fn from_headers(headers: &[String]) -> Self {
        let entries = infer_mapping(headers)
            .into_iter()
            .map(|(header, field)| {
                (
                    header,
                    MappingEntry {
                        field,
                        origin: MappingOrigin::Inferred,
                    },
                )
            })
            .collect();
        Self {
            headers: headers.to_vec(),
            entries,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn entry(&self, header: &str) -> Option<&MappingEntry> {
        self.entries.get(header)
    }

    /// Re-points a header at `field`, or clears it to unmapped with
    /// `None`. The header must belong to the table.
    pub fn set(&mut self, header: &str, field: Option<LeadField>) -> Result<(), MapError> {
        if !self.headers.iter().any(|known| known == header) {
            return Err(MapError::UnknownHeader {
                header: header.to_string(),
            });
        }
        match field {
            Some(field) => {
                self.entries.insert(
                    header.to_string(),
                    MappingEntry {
                        field,
                        origin: MappingOrigin::Manual,
                    },
                );
            }
            None => {
                self.entries.remove(header);
            }
        }
        Ok(())
    }

    /// Applies a batch of user overrides, e.g. from a mapping file.
    /// `None` values clear the header to unmapped. Fails on the first
    /// header that does not belong to the table.
    pub fn apply_overrides(
        &mut self,
        overrides: &BTreeMap<String, Option<LeadField>>,
    ) -> Result<(), MapError> {
        for (header, field) in overrides {
            self.set(header, *field)?;
        }
        debug!(overrides = overrides.len(), "applied mapping overrides");
        Ok(())
    }

    /// The plain header -> field map handed to the import pipeline.
    #[must_use]
    pub fn mapping(&self) -> FieldMapping {
        self.entries
            .iter()
            .map(|(header, entry)| (header.clone(), entry.field))
            .collect()
    }

    /// Headers with no target, in table order.
    #[must_use]
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|header| !self.entries.contains_key(header.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.len()
    }
}
