//! Canonical import template offered for download before an import.

const TEMPLATE_CSV: &str = "\
First Name,Last Name,Email,Company,Phone,LinkedIn,Twitter,Status,Assigned To,Notes
John,Doe,john.doe@example.com,Acme Inc,+1 555 0100,https://linkedin.com/in/johndoe,@johndoe,New,sarah,Met at the fall trade show
Jane,Smith,jane.smith@example.com,Globex,+1 555 0199,,,Contacted,mike,Referred by John
";

/// The sample CSV users download to see the expected shape.
///
/// Fixed content: the canonical importable columns in order plus two
/// example leads. Byte-identical on every call, and free of commas
/// inside cells so it survives the naive tokenizer unchanged.
#[must_use]
pub fn lead_template_csv() -> &'static str {
    TEMPLATE_CSV
}

#[cfg(test)]
mod tests {
    use lead_map::infer_mapping;
    use lead_model::LeadField;

    use super::*;
    use crate::csv_table::parse_csv;

    #[test]
    fn template_is_stable_across_calls() {
        assert_eq!(lead_template_csv(), lead_template_csv());
        insta::assert_snapshot!(lead_template_csv(), @r"
        First Name,Last Name,Email,Company,Phone,LinkedIn,Twitter,Status,Assigned To,Notes
        John,Doe,john.doe@example.com,Acme Inc,+1 555 0100,https://linkedin.com/in/johndoe,@johndoe,New,sarah,Met at the fall trade show
        Jane,Smith,jane.smith@example.com,Globex,+1 555 0199,,,Contacted,mike,Referred by John
        ");
    }

    #[test]
    fn template_survives_the_naive_tokenizer() {
        let table = parse_csv(lead_template_csv()).unwrap();
        assert_eq!(table.column_count(), 10);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0][2], "john.doe@example.com");
        assert_eq!(table.rows()[1][7], "Contacted");
    }

    #[test]
    fn every_template_column_is_inferrable() {
        let table = parse_csv(lead_template_csv()).unwrap();
        let mapping = infer_mapping(table.headers());
        assert_eq!(mapping.len(), table.column_count());
        assert_eq!(mapping.get("First Name"), Some(&LeadField::FirstName));
        assert_eq!(mapping.get("Assigned To"), Some(&LeadField::AssignedTo));
        assert_eq!(mapping.get("Notes"), Some(&LeadField::Notes));
    }
}
