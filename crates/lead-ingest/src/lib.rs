//! CSV ingestion for lead import.
//!
//! The tokenizer here is deliberately naive: lines split on `\n`, cells
//! split on `,`, everything trimmed, no quoting or escaping. Spreadsheet
//! exports with quoted commas will split mid-cell; that is the accepted
//! contract of the import path, and the UI surfaces it through the
//! preview step. Proper quoting exists only on the export side of the
//! CLI, which writes through a real CSV encoder.

pub mod csv_table;
pub mod error;
pub mod template;

pub use csv_table::{PREVIEW_ROWS, RawCsvTable, parse_csv, parse_csv_with_mapping};
pub use error::ParseError;
pub use template::lead_template_csv;
