//! Header-to-field mapping for CSV lead import.
//!
//! Two layers: [`infer`] guesses a target field for each CSV header with
//! ordered keyword rules, and [`state`] tracks the working mapping while
//! the user reviews and overrides those guesses before running the
//! import.

pub mod error;
pub mod infer;
pub mod state;

pub use error::MapError;
pub use infer::{infer_field, infer_mapping};
pub use state::{MappingEntry, MappingOrigin, MappingState};
