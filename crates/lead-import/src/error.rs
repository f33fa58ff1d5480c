use thiserror::Error;

/// Caller-contract violations. Data-level problems in individual rows
/// never produce errors; they surface as skip counts instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("mapping references a header the table does not have: {header:?}")]
    UnknownHeader { header: String },
    #[error("id generator repeated an id within one batch: {id}")]
    DuplicateId { id: String },
}
