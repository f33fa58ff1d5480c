//! Property tests for the naive CSV tokenizer.
//!
//! Two guarantees hold for arbitrary input: parsed tables are always
//! rectangular (row width == header width, however ragged the source
//! lines were), and blank lines never influence the result.

use lead_ingest::parse_csv;
use proptest::prelude::*;

fn header_strategy() -> impl Strategy<Value = Vec<String>> {
    // First header char is alphabetic so the header row is never all-empty.
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9 _]{0,11}", 1..6)
}

fn row_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    // Rows are deliberately ragged: 0..9 cells regardless of header width.
    prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 ]{0,8}", 0..9), 0..12)
}

fn render_csv(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut text = headers.join(",");
    for row in rows {
        text.push('\n');
        text.push_str(&row.join(","));
    }
    text
}

proptest! {
    #[test]
    fn parsed_rows_always_match_header_width(
        headers in header_strategy(),
        rows in row_strategy(),
    ) {
        let table = parse_csv(&render_csv(&headers, &rows)).unwrap();
        prop_assert_eq!(table.column_count(), headers.len());
        for row in table.rows() {
            prop_assert_eq!(row.len(), table.column_count());
        }
    }

    #[test]
    fn blank_lines_do_not_change_the_parse(
        headers in header_strategy(),
        rows in row_strategy(),
    ) {
        let plain = render_csv(&headers, &rows);

        // Re-render with noise: blank and whitespace-only lines before the
        // header, between every line, and after the last one.
        let mut noisy = String::from("\n   \n");
        for line in plain.split('\n') {
            noisy.push_str(line);
            noisy.push_str("\n\n\t\n");
        }

        let expected = parse_csv(&plain).unwrap();
        let with_blanks = parse_csv(&noisy).unwrap();
        prop_assert_eq!(expected, with_blanks);
    }
}
