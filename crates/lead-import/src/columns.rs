//! Resolves a header-name mapping into column positions.

use std::collections::BTreeMap;

use lead_ingest::RawCsvTable;
use lead_model::{FieldMapping, LeadField};

use crate::error::PipelineError;

/// Target field -> column index, resolved once per import.
///
/// Headers are walked in table order and the first column claiming a
/// target wins it; later columns mapped to the same target contribute
/// nothing. Duplicate header names share one mapping entry, so the
/// walk also settles those in favor of the earliest position.
#[derive(Debug, Clone)]
pub(crate) struct ColumnPlan {
    targets: BTreeMap<LeadField, usize>,
}

impl ColumnPlan {
    pub(crate) fn resolve(
        table: &RawCsvTable,
        mapping: &FieldMapping,
    ) -> Result<Self, PipelineError> {
        for header in mapping.keys() {
            if !table.headers().iter().any(|known| known == header) {
                return Err(PipelineError::UnknownHeader {
                    header: header.clone(),
                });
            }
        }

        let mut targets = BTreeMap::new();
        for (index, header) in table.headers().iter().enumerate() {
            if let Some(field) = mapping.get(header) {
                targets.entry(*field).or_insert(index);
            }
        }
        Ok(Self { targets })
    }

    /// The trimmed cell for `field`, or `""` when the field is unmapped.
    pub(crate) fn text<'a>(&self, row: &'a [String], field: LeadField) -> &'a str {
        self.targets
            .get(&field)
            .and_then(|index| row.get(*index))
            .map(|cell| cell.trim())
            .unwrap_or("")
    }

    /// Like [`ColumnPlan::text`], but `None` for empty values.
    pub(crate) fn non_empty<'a>(&self, row: &'a [String], field: LeadField) -> Option<&'a str> {
        let value = self.text(row, field);
        (!value.is_empty()).then_some(value)
    }
}
