//! Raw CSV table model and the naive line tokenizer.

use lead_map::infer_mapping;
use lead_model::FieldMapping;
use tracing::debug;

use crate::error::ParseError;

/// Number of data rows surfaced in the import preview.
pub const PREVIEW_ROWS: usize = 5;

/// A tokenized CSV payload: header names plus data rows.
///
/// Rectangularity is structural: every row holds exactly
/// `headers.len()` cells, short source lines padded with empty strings
/// and long ones truncated. Construction goes through
/// [`RawCsvTable::new`] or [`parse_csv`], both of which enforce this, so
/// positional header/cell zips downstream cannot go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawCsvTable {
    /// Builds a table from pre-tokenized parts, fitting every row to the
    /// header width.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| fit_to_width(row, width))
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The first [`PREVIEW_ROWS`] data rows, for the review step.
    #[must_use]
    pub fn preview(&self) -> &[Vec<String>] {
        let end = self.rows.len().min(PREVIEW_ROWS);
        &self.rows[..end]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Tokenizes raw CSV text into a [`RawCsvTable`].
///
/// Split on `\n`, then on `,`, trimming headers and cells individually;
/// a leading U+FEFF BOM is dropped and carriage returns disappear with
/// the trim. Blank and whitespace-only lines are skipped wherever they
/// appear, and the first surviving line is the header row. There is no
/// quote handling: a quoted cell containing a comma splits in half.
pub fn parse_csv(text: &str) -> Result<RawCsvTable, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(ParseError::Empty);
    };
    let headers = split_line(header_line);
    if headers.iter().all(String::is_empty) {
        return Err(ParseError::MissingHeader);
    }

    let width = headers.len();
    let rows: Vec<Vec<String>> = lines
        .map(|line| fit_to_width(split_line(line), width))
        .collect();

    debug!(columns = width, rows = rows.len(), "parsed CSV input");

    Ok(RawCsvTable { headers, rows })
}

/// [`parse_csv`] plus the inferred initial mapping for the table's
/// headers, as the import review step consumes them.
pub fn parse_csv_with_mapping(text: &str) -> Result<(RawCsvTable, FieldMapping), ParseError> {
    let table = parse_csv(text)?;
    let mapping = infer_mapping(table.headers());
    Ok((table, mapping))
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

fn fit_to_width(mut cells: Vec<String>, width: usize) -> Vec<String> {
    cells.resize(width, String::new());
    cells
}
