use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Target fields a CSV column can be mapped onto during import.
///
/// The wire names (serde and `as_str`) are the camelCase identifiers the
/// CRM uses in its mapping documents, e.g. `"firstName"` or `"assignedTo"`.
/// A column with no target is simply absent from the mapping; there is no
/// `Unmapped` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    FirstName,
    LastName,
    /// A single column carrying the whole name. Split into first/last
    /// during normalization when the direct name fields are empty.
    FullName,
    Email,
    Company,
    Phone,
    Linkedin,
    Twitter,
    /// Never produced by inference; reachable only through a manual
    /// mapping override.
    Facebook,
    /// Never produced by inference; reachable only through a manual
    /// mapping override.
    Instagram,
    Status,
    AssignedTo,
    Notes,
}

/// Header name -> target field. Headers missing from the map are ignored
/// by the import pipeline.
pub type FieldMapping = BTreeMap<String, LeadField>;

impl LeadField {
    /// All mappable targets, in canonical order. Used for listing valid
    /// values in CLI errors and mapping tables.
    pub const ALL: [LeadField; 13] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::FullName,
        LeadField::Email,
        LeadField::Company,
        LeadField::Phone,
        LeadField::Linkedin,
        LeadField::Twitter,
        LeadField::Facebook,
        LeadField::Instagram,
        LeadField::Status,
        LeadField::AssignedTo,
        LeadField::Notes,
    ];

    /// Returns the canonical camelCase identifier for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::FullName => "fullName",
            LeadField::Email => "email",
            LeadField::Company => "company",
            LeadField::Phone => "phone",
            LeadField::Linkedin => "linkedin",
            LeadField::Twitter => "twitter",
            LeadField::Facebook => "facebook",
            LeadField::Instagram => "instagram",
            LeadField::Status => "status",
            LeadField::AssignedTo => "assignedTo",
            LeadField::Notes => "notes",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeadField {
    type Err = String;

    /// Parse a field identifier, case-insensitively, so hand-written
    /// mapping files can say `"firstname"` as well as `"firstName"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(LeadField::FirstName),
            "lastname" => Ok(LeadField::LastName),
            "fullname" => Ok(LeadField::FullName),
            "email" => Ok(LeadField::Email),
            "company" => Ok(LeadField::Company),
            "phone" => Ok(LeadField::Phone),
            "linkedin" => Ok(LeadField::Linkedin),
            "twitter" => Ok(LeadField::Twitter),
            "facebook" => Ok(LeadField::Facebook),
            "instagram" => Ok(LeadField::Instagram),
            "status" => Ok(LeadField::Status),
            "assignedto" => Ok(LeadField::AssignedTo),
            "notes" => Ok(LeadField::Notes),
            _ => Err(format!("Unknown lead field: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_camel_case_names() {
        let json = serde_json::to_string(&LeadField::AssignedTo).unwrap();
        assert_eq!(json, "\"assignedTo\"");

        let parsed: LeadField = serde_json::from_str("\"fullName\"").unwrap();
        assert_eq!(parsed, LeadField::FullName);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("FirstName".parse::<LeadField>().unwrap(), LeadField::FirstName);
        assert_eq!("ASSIGNEDTO".parse::<LeadField>().unwrap(), LeadField::AssignedTo);
        assert!("middleName".parse::<LeadField>().is_err());
    }

    #[test]
    fn as_str_round_trips_for_all_fields() {
        for field in LeadField::ALL {
            assert_eq!(field.as_str().parse::<LeadField>().unwrap(), field);
        }
    }
}
