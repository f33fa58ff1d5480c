use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Where a lead entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    Csv,
    Manual,
}

impl LeadSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Csv => "csv",
            LeadSource::Manual => "manual",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Social networks a lead profile can be linked on. Only platforms with a
/// non-empty value appear in a record's `social_profiles` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" => Ok(SocialPlatform::Facebook),
            "instagram" => Ok(SocialPlatform::Instagram),
            "linkedin" => Ok(SocialPlatform::Linkedin),
            "twitter" => Ok(SocialPlatform::Twitter),
            _ => Err(format!("Unknown social platform: {}", s)),
        }
    }
}

/// A normalized lead as stored by the CRM.
///
/// Import guarantees: `email` is non-empty and at least one of
/// `first_name`/`last_name` is non-empty on every record the pipeline
/// emits. All other string fields default to `""` when the source column
/// was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub social_profiles: BTreeMap<SocialPlatform, String>,
    /// Id of the pipeline stage this lead sits in.
    pub status: String,
    #[serde(default)]
    pub assigned_to: String,
    pub source: LeadSource,
}

impl LeadRecord {
    /// First and last name joined for display; whichever is present when
    /// the other is empty.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, _) => self.last_name.clone(),
        }
    }
}
