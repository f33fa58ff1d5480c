//! Per-row normalization: mapped cells into lead record fields.

use std::collections::BTreeMap;
use std::fmt;

use lead_model::{LeadField, LeadRecord, LeadSource, SocialPlatform, resolve_stage_id};

use crate::columns::ColumnPlan;
use crate::pipeline::ImportOptions;

const SOCIAL_COLUMNS: [(LeadField, SocialPlatform); 4] = [
    (LeadField::Linkedin, SocialPlatform::Linkedin),
    (LeadField::Twitter, SocialPlatform::Twitter),
    (LeadField::Facebook, SocialPlatform::Facebook),
    (LeadField::Instagram, SocialPlatform::Instagram),
];

/// Why a row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    Blank,
    MissingEmail,
    MissingName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Blank => "blank row",
            SkipReason::MissingEmail => "missing email",
            SkipReason::MissingName => "missing name",
        };
        write!(f, "{reason}")
    }
}

/// Everything of a lead record except the id, which the pipeline
/// assigns at emission time, plus whether the status value failed to
/// resolve and fell back to the initial stage.
#[derive(Debug)]
pub(crate) struct RowFields {
    first_name: String,
    last_name: String,
    email: String,
    company: String,
    phone: String,
    notes: String,
    assigned_to: String,
    status: String,
    social_profiles: BTreeMap<SocialPlatform, String>,
    pub(crate) unknown_status: bool,
}

impl RowFields {
    pub(crate) fn into_record(self, id: String) -> LeadRecord {
        LeadRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            company: self.company,
            phone: self.phone,
            notes: self.notes,
            social_profiles: self.social_profiles,
            status: self.status,
            assigned_to: self.assigned_to,
            source: LeadSource::Csv,
        }
    }
}

/// Applies the column plan to one row.
///
/// Step order is contractual: blank check, names (direct values first,
/// then full-name splitting into still-empty slots), status resolution,
/// direct copies, socials, and finally the emit gate requiring an email
/// plus at least one name part.
pub(crate) fn normalize_row(
    plan: &ColumnPlan,
    row: &[String],
    options: &ImportOptions,
) -> Result<RowFields, SkipReason> {
    if row.iter().all(|cell| cell.trim().is_empty()) {
        return Err(SkipReason::Blank);
    }

    let mut first_name = plan.text(row, LeadField::FirstName).to_string();
    let mut last_name = plan.text(row, LeadField::LastName).to_string();
    if let Some(full_name) = plan.non_empty(row, LeadField::FullName) {
        let mut tokens = full_name.split_whitespace();
        if let Some(first) = tokens.next() {
            let rest = tokens.collect::<Vec<_>>().join(" ");
            if first_name.is_empty() {
                first_name = first.to_string();
            }
            if last_name.is_empty() && !rest.is_empty() {
                last_name = rest;
            }
        }
    }

    let mut unknown_status = false;
    let status = match plan.non_empty(row, LeadField::Status) {
        Some(raw) => match resolve_stage_id(&options.stages, raw) {
            Some(id) => id.to_string(),
            None => {
                unknown_status = true;
                options.initial_stage_id.clone()
            }
        },
        None => options.initial_stage_id.clone(),
    };

    let email = plan.text(row, LeadField::Email).to_string();
    if email.is_empty() {
        return Err(SkipReason::MissingEmail);
    }
    if first_name.is_empty() && last_name.is_empty() {
        return Err(SkipReason::MissingName);
    }

    let mut social_profiles = BTreeMap::new();
    for (field, platform) in SOCIAL_COLUMNS {
        if let Some(value) = plan.non_empty(row, field) {
            social_profiles.insert(platform, value.to_string());
        }
    }

    Ok(RowFields {
        first_name,
        last_name,
        email,
        company: plan.text(row, LeadField::Company).to_string(),
        phone: plan.text(row, LeadField::Phone).to_string(),
        notes: plan.text(row, LeadField::Notes).to_string(),
        assigned_to: plan.text(row, LeadField::AssignedTo).to_string(),
        status,
        social_profiles,
        unknown_status,
    })
}
