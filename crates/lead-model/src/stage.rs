use serde::{Deserialize, Serialize};

/// A stage of the sales pipeline a lead moves through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    pub id: String,
    pub name: String,
}

impl PipelineStage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The stock funnel used when no custom stage configuration is supplied.
#[must_use]
pub fn default_stages() -> Vec<PipelineStage> {
    vec![
        PipelineStage::new("new", "New"),
        PipelineStage::new("contacted", "Contacted"),
        PipelineStage::new("qualified", "Qualified"),
        PipelineStage::new("proposal", "Proposal"),
        PipelineStage::new("won", "Won"),
        PipelineStage::new("lost", "Lost"),
    ]
}

/// Id of the stage newly imported leads land in: the first configured
/// stage.
#[must_use]
pub fn initial_stage_id(stages: &[PipelineStage]) -> Option<&str> {
    stages.first().map(|stage| stage.id.as_str())
}

/// Resolves a raw status value against stage display names.
///
/// The value is trimmed and compared case-insensitively; the first stage
/// whose name matches wins. Empty values and unknown names resolve to
/// `None`, leaving the caller to fall back to the initial stage.
#[must_use]
pub fn resolve_stage_id<'a>(stages: &'a [PipelineStage], raw: &str) -> Option<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    stages
        .iter()
        .find(|stage| stage.name.eq_ignore_ascii_case(trimmed))
        .map(|stage| stage.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_stage_names_case_insensitively() {
        let stages = default_stages();
        assert_eq!(resolve_stage_id(&stages, "Contacted"), Some("contacted"));
        assert_eq!(resolve_stage_id(&stages, "  qualified  "), Some("qualified"));
        assert_eq!(resolve_stage_id(&stages, "WON"), Some("won"));
    }

    #[test]
    fn unknown_or_empty_status_resolves_to_none() {
        let stages = default_stages();
        assert_eq!(resolve_stage_id(&stages, "Negotiating"), None);
        assert_eq!(resolve_stage_id(&stages, ""), None);
        assert_eq!(resolve_stage_id(&stages, "   "), None);
        assert_eq!(resolve_stage_id(&[], "New"), None);
    }

    #[test]
    fn initial_stage_is_the_first_configured() {
        assert_eq!(initial_stage_id(&default_stages()), Some("new"));
        assert_eq!(initial_stage_id(&[]), None);
    }

    #[test]
    fn first_matching_stage_wins_on_duplicate_names() {
        let stages = vec![
            PipelineStage::new("new-a", "New"),
            PipelineStage::new("new-b", "new"),
        ];
        assert_eq!(resolve_stage_id(&stages, "NEW"), Some("new-a"));
    }
}
