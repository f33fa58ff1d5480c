//! The import pipeline: mapping application and record normalization.
//!
//! Takes a parsed [`RawCsvTable`](lead_ingest::RawCsvTable) plus a
//! header-to-field mapping and emits normalized
//! [`LeadRecord`](lead_model::LeadRecord)s. Row-level data problems are
//! never errors: rows that cannot become a usable lead are skipped and
//! counted, and the caller reports "imported N of M". Errors are
//! reserved for broken caller contracts (a mapping that references
//! headers the table does not have, or an id generator that repeats
//! itself within a batch).

mod columns;
mod normalize;

pub mod error;
pub mod ids;
pub mod pipeline;

pub use error::PipelineError;
pub use ids::{IdGenerator, SequentialGenerator, UuidGenerator};
pub use pipeline::{ImportOptions, ImportOutcome, ImportStats, run_import};
