//! The parse → infer → apply orchestration behind `import` and
//! `preview`.
//!
//! Each stage runs inside its own `tracing` span with an elapsed-time
//! field, taking the previous stage's output. Persistence stays with the
//! caller: the pipeline ends at an [`ImportOutcome`] so dry runs and
//! tests share the exact code path of a real import.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use lead_import::{IdGenerator, ImportOptions, ImportOutcome, run_import};
use lead_ingest::{RawCsvTable, parse_csv};
use lead_map::MappingState;
use lead_model::{LeadField, PipelineStage};
use tracing::{info, info_span, warn};

/// Header → field-or-clear overrides, as read from a `--mapping` file.
/// `null` values clear a header that inference mapped.
pub type MappingOverrides = BTreeMap<String, Option<LeadField>>;

/// Everything one pipeline run produces, kept together so the CLI can
/// print the preview, the final mapping, and the import counts from a
/// single pass over the input.
#[derive(Debug)]
pub struct PipelineRun {
    pub table: RawCsvTable,
    pub mapping: MappingState,
    pub outcome: ImportOutcome,
}

/// Runs the full pipeline over raw CSV text.
///
/// Inference seeds the mapping, `overrides` (if any) are overlaid, and
/// the resulting mapping is applied to every row. Fails on unparseable
/// input, overrides naming unknown headers, or a broken id generator;
/// row-level data problems only show up in the outcome's stats.
pub fn run_pipeline(
    text: &str,
    overrides: Option<&MappingOverrides>,
    options: &ImportOptions,
    ids: &mut dyn IdGenerator,
) -> Result<PipelineRun> {
    let parse_start = Instant::now();
    let table = info_span!("parse")
        .in_scope(|| parse_csv(text))
        .context("parse CSV input")?;
    info!(
        columns = table.column_count(),
        rows = table.row_count(),
        duration_ms = parse_start.elapsed().as_millis(),
        "parse complete"
    );

    let infer_span = info_span!("infer");
    let mapping = infer_span.in_scope(|| -> Result<MappingState> {
        let mut mapping = MappingState::from_headers(table.headers());
        if let Some(overrides) = overrides {
            mapping
                .apply_overrides(overrides)
                .context("apply mapping overrides")?;
        }
        let unmapped = mapping.unmapped_headers();
        if !unmapped.is_empty() {
            warn!(
                unmapped = unmapped.len(),
                headers = ?unmapped,
                "columns without a target field will be dropped"
            );
        }
        Ok(mapping)
    })?;

    let apply_start = Instant::now();
    let outcome = info_span!("apply")
        .in_scope(|| run_import(&table, &mapping.mapping(), options, ids))
        .context("apply field mapping")?;
    info!(
        imported = outcome.stats.imported,
        skipped = outcome.stats.skipped(),
        duration_ms = apply_start.elapsed().as_millis(),
        "apply complete"
    );

    Ok(PipelineRun {
        table,
        mapping,
        outcome,
    })
}

/// Loads a stage configuration file: a JSON array of `{id, name}`.
pub fn load_stage_file(path: &Path) -> Result<Vec<PipelineStage>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read stage file {}", path.display()))?;
    let stages: Vec<PipelineStage> = serde_json::from_str(&contents)
        .with_context(|| format!("parse stage file {}", path.display()))?;
    Ok(stages)
}

/// Loads a mapping override file: a JSON object of header → field name
/// or `null`.
pub fn load_override_file(path: &Path) -> Result<MappingOverrides> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read mapping file {}", path.display()))?;
    let overrides: MappingOverrides = serde_json::from_str(&contents)
        .with_context(|| format!("parse mapping file {}", path.display()))?;
    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use lead_import::SequentialGenerator;
    use lead_model::default_stages;

    use super::*;

    #[test]
    fn pipeline_runs_end_to_end_with_inference() {
        let text = "First Name,Last Name,Email\nJohn,Doe,john@x.com\n";
        let options = ImportOptions::new("new", default_stages());
        let mut ids = SequentialGenerator::default();
        let run = run_pipeline(text, None, &options, &mut ids).unwrap();
        assert_eq!(run.table.row_count(), 1);
        assert_eq!(run.mapping.mapped_count(), 3);
        assert_eq!(run.outcome.records.len(), 1);
        assert_eq!(run.outcome.records[0].id, "lead-1");
    }

    #[test]
    fn overrides_overlay_the_inferred_mapping() {
        let text = "Name,Email,Extra\nJane Doe,jane@x.com,keep this\n";
        let overrides =
            MappingOverrides::from([("Extra".to_string(), Some(LeadField::Notes))]);
        let options = ImportOptions::new("new", Vec::new());
        let mut ids = SequentialGenerator::default();
        let run = run_pipeline(text, Some(&overrides), &options, &mut ids).unwrap();
        assert_eq!(run.outcome.records[0].notes, "keep this");
    }

    #[test]
    fn override_for_an_unknown_header_errors() {
        let text = "Email\njane@x.com\n";
        let overrides =
            MappingOverrides::from([("Surname".to_string(), Some(LeadField::LastName))]);
        let options = ImportOptions::default();
        let mut ids = SequentialGenerator::default();
        let error = run_pipeline(text, Some(&overrides), &options, &mut ids).unwrap_err();
        assert!(error.to_string().contains("apply mapping overrides"));
    }

    #[test]
    fn unparseable_input_errors_with_context() {
        let options = ImportOptions::default();
        let mut ids = SequentialGenerator::default();
        let error = run_pipeline("", None, &options, &mut ids).unwrap_err();
        assert!(error.to_string().contains("parse CSV input"));
    }
}
