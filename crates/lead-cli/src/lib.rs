//! Library components of the lead importer CLI.
//!
//! The binary keeps argument parsing and printing to itself; everything a
//! test (or another front end) needs lives here: logging setup, the
//! parse/infer/apply orchestration, and the import report.

pub mod logging;
pub mod pipeline;
pub mod report;
