//! The import report written by `import --report`.
//!
//! A report records provenance and counts for one run: which file was
//! imported, its checksum, when, and how the rows fared. It never
//! contains lead field values; emails and names stay out of reports and
//! logs alike.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lead_import::{ImportOutcome, ImportStats};
use serde::Serialize;
use sha2::Digest;

/// Summary of one import run, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// File name of the imported CSV (no directory components).
    pub source_file: String,
    /// Hex SHA-256 of the raw source bytes.
    pub sha256: String,
    pub created_at: DateTime<Utc>,
    pub dry_run: bool,
    #[serde(flatten)]
    pub stats: ImportStats,
    /// Imported records per stage id.
    pub stage_counts: BTreeMap<String, usize>,
}

impl ImportReport {
    /// Builds the report for a finished run over `source_bytes` read
    /// from `source_path`.
    #[must_use]
    pub fn new(
        source_path: &Path,
        source_bytes: &[u8],
        dry_run: bool,
        outcome: &ImportOutcome,
    ) -> Self {
        let mut stage_counts = BTreeMap::new();
        for record in &outcome.records {
            *stage_counts.entry(record.status.clone()).or_insert(0) += 1;
        }
        Self {
            source_file: source_path
                .file_name()
                .map_or_else(|| source_path.display().to_string(), |name| {
                    name.to_string_lossy().into_owned()
                }),
            sha256: sha256_hex(source_bytes),
            created_at: Utc::now(),
            dry_run,
            stats: outcome.stats,
            stage_counts,
        }
    }

    /// Writes the report as pretty JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize import report")?;
        fs::write(path, json + "\n")
            .with_context(|| format!("write import report {}", path.display()))?;
        Ok(())
    }
}

/// Hex-encoded SHA-256 digest.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}
