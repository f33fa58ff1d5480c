use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("unknown CSV header: {header:?}")]
    UnknownHeader { header: String },
}
