use lead_model::{FieldMapping, LeadField};
use tracing::debug;

/// Guesses the target field for a single CSV header.
///
/// The header is trimmed and lower-cased, then the rules below run in
/// order and the first match wins. The ordering is contractual: a header
/// containing both "status" and "assign" maps to `Status`, and the
/// exact-match rule for `"name"` never fires for headers like
/// `"Company Name"`, which fall through to the keyword rules.
#[must_use]
pub fn infer_field(header: &str) -> Option<LeadField> {
    let header = header.trim().to_lowercase();

    if header.contains("first") && header.contains("name") {
        return Some(LeadField::FirstName);
    }
    if header.contains("last") && header.contains("name") {
        return Some(LeadField::LastName);
    }
    if header == "name" {
        return Some(LeadField::FullName);
    }
    if header.contains("email") {
        return Some(LeadField::Email);
    }
    if header.contains("company") {
        return Some(LeadField::Company);
    }
    if header.contains("phone") {
        return Some(LeadField::Phone);
    }
    if header.contains("linkedin") {
        return Some(LeadField::Linkedin);
    }
    if header.contains("twitter") {
        return Some(LeadField::Twitter);
    }
    if header.contains("status") {
        return Some(LeadField::Status);
    }
    if header.contains("assign") || header.contains("rep") {
        return Some(LeadField::AssignedTo);
    }
    if header.contains("note") {
        return Some(LeadField::Notes);
    }

    None
}

/// Infers a mapping for every header of a parsed table. Headers with no
/// matching rule are left out of the map entirely.
#[must_use]
pub fn infer_mapping(headers: &[String]) -> FieldMapping {
    let mut mapping = FieldMapping::new();
    for header in headers {
        if let Some(field) = infer_field(header) {
            mapping.insert(header.clone(), field);
        }
    }
    debug!(
        headers = headers.len(),
        mapped = mapping.len(),
        "inferred initial field mapping"
    );
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_common_headers() {
        assert_eq!(infer_field("First Name"), Some(LeadField::FirstName));
        assert_eq!(infer_field("last_name"), Some(LeadField::LastName));
        assert_eq!(infer_field("Email Address"), Some(LeadField::Email));
        assert_eq!(infer_field("Company"), Some(LeadField::Company));
        assert_eq!(infer_field("Phone Number"), Some(LeadField::Phone));
        assert_eq!(infer_field("LinkedIn URL"), Some(LeadField::Linkedin));
        assert_eq!(infer_field("twitter handle"), Some(LeadField::Twitter));
        assert_eq!(infer_field("Status"), Some(LeadField::Status));
        assert_eq!(infer_field("Assigned To"), Some(LeadField::AssignedTo));
        assert_eq!(infer_field("Sales Rep"), Some(LeadField::AssignedTo));
        assert_eq!(infer_field("Notes"), Some(LeadField::Notes));
    }

    #[test]
    fn full_name_requires_exact_match() {
        assert_eq!(infer_field("Name"), Some(LeadField::FullName));
        assert_eq!(infer_field("  NAME  "), Some(LeadField::FullName));
        // "Company Name" must not become a full name column.
        assert_eq!(infer_field("Company Name"), Some(LeadField::Company));
        assert_eq!(infer_field("Nickname"), None);
    }

    #[test]
    fn rule_order_breaks_keyword_collisions() {
        // "first"+"name" outranks the bare "name" and "email" rules.
        assert_eq!(infer_field("first name email"), Some(LeadField::FirstName));
        // "status" outranks "assign".
        assert_eq!(infer_field("Assignment Status"), Some(LeadField::Status));
        // "rep" matches as a plain substring.
        assert_eq!(infer_field("Reply"), Some(LeadField::AssignedTo));
    }

    #[test]
    fn facebook_and_instagram_are_never_inferred() {
        assert_eq!(infer_field("Facebook"), None);
        assert_eq!(infer_field("Instagram Handle"), None);
    }

    #[test]
    fn unrecognized_headers_stay_unmapped() {
        assert_eq!(infer_field("id"), None);
        assert_eq!(infer_field("Created At"), None);
        // The hyphen defeats the substring check; accepted behavior.
        assert_eq!(infer_field("E-mail"), None);
    }

    #[test]
    fn mapping_is_deterministic_and_skips_unmapped() {
        let headers = vec![
            "Name".to_string(),
            "Email".to_string(),
            "Favorite Color".to_string(),
        ];
        let first = infer_mapping(&headers);
        let second = infer_mapping(&headers);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(!first.contains_key("Favorite Color"));
    }
}
