use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("CSV input is empty")]
    Empty,
    #[error("CSV input has no usable header row")]
    MissingHeader,
}
