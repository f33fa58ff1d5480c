//! Import orchestration: resolve the mapping once, walk the rows, and
//! hand out ids to everything that survives normalization.

use std::collections::BTreeSet;

use lead_ingest::RawCsvTable;
use lead_model::{FieldMapping, LeadRecord, PipelineStage, default_stages, initial_stage_id};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::columns::ColumnPlan;
use crate::error::PipelineError;
use crate::ids::IdGenerator;
use crate::normalize::{SkipReason, normalize_row};

/// Stage configuration for an import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Stage id assigned when a row has no status or an unknown one.
    pub initial_stage_id: String,
    /// Stages whose names status values resolve against. Empty means no
    /// custom stages: every status falls back to the initial stage.
    pub stages: Vec<PipelineStage>,
}

impl ImportOptions {
    #[must_use]
    pub fn new(initial_stage_id: impl Into<String>, stages: Vec<PipelineStage>) -> Self {
        Self {
            initial_stage_id: initial_stage_id.into(),
            stages,
        }
    }

    /// Options for a stage list, landing new leads in its first stage.
    /// Returns `None` for an empty list, which has no landing stage.
    #[must_use]
    pub fn for_stages(stages: Vec<PipelineStage>) -> Option<Self> {
        let initial = initial_stage_id(&stages)?.to_string();
        Some(Self::new(initial, stages))
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        let stages = default_stages();
        // The stock funnel is never empty.
        let initial = initial_stage_id(&stages).unwrap_or("new").to_string();
        Self::new(initial, stages)
    }
}

/// Row accounting for one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    pub rows_in: usize,
    pub imported: usize,
    pub skipped_blank: usize,
    pub skipped_no_email: usize,
    pub skipped_no_name: usize,
    /// Imported rows whose status value matched no configured stage and
    /// fell back to the initial stage.
    pub unknown_status: usize,
}

impl ImportStats {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_no_email + self.skipped_no_name
    }
}

/// Emitted records plus the counts behind "imported N of M".
#[derive(Debug)]
pub struct ImportOutcome {
    pub records: Vec<LeadRecord>,
    pub stats: ImportStats,
}

/// Applies `mapping` to every row of `table`.
///
/// Rows are processed in table order and surviving records appear in
/// that order, each with a fresh id from `ids` and `source = csv`.
/// Fails only on caller-contract violations; see [`PipelineError`].
pub fn run_import(
    table: &RawCsvTable,
    mapping: &FieldMapping,
    options: &ImportOptions,
    ids: &mut dyn IdGenerator,
) -> Result<ImportOutcome, PipelineError> {
    let plan = ColumnPlan::resolve(table, mapping)?;

    let mut stats = ImportStats {
        rows_in: table.row_count(),
        ..ImportStats::default()
    };
    let mut seen_ids = BTreeSet::new();
    let mut records = Vec::new();

    for (index, row) in table.rows().iter().enumerate() {
        match normalize_row(&plan, row, options) {
            Ok(fields) => {
                let id = ids.next_id();
                if !seen_ids.insert(id.clone()) {
                    return Err(PipelineError::DuplicateId { id });
                }
                stats.unknown_status += usize::from(fields.unknown_status);
                records.push(fields.into_record(id));
                stats.imported += 1;
            }
            Err(reason) => {
                debug!(row = index + 1, %reason, "skipped row");
                match reason {
                    SkipReason::Blank => stats.skipped_blank += 1,
                    SkipReason::MissingEmail => stats.skipped_no_email += 1,
                    SkipReason::MissingName => stats.skipped_no_name += 1,
                }
            }
        }
    }

    if stats.unknown_status > 0 {
        warn!(
            rows = stats.unknown_status,
            "unknown status values fell back to the initial stage"
        );
    }

    info!(
        rows_in = stats.rows_in,
        imported = stats.imported,
        skipped = stats.skipped(),
        "normalized CSV rows into lead records"
    );

    Ok(ImportOutcome { records, stats })
}
