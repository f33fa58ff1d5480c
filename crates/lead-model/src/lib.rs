//! Domain model for the lead import pipeline.
//!
//! This crate defines the shared vocabulary of the importer: the lead
//! record shape persisted by the CRM, the set of fields a CSV column can
//! map onto, and the pipeline stages a lead moves through. Everything
//! here is plain data with deterministic ordering so downstream crates
//! (ingest, mapping, import, storage) behave identically across runs.

pub mod field;
pub mod lead;
pub mod stage;

pub use field::{FieldMapping, LeadField};
pub use lead::{LeadRecord, LeadSource, SocialPlatform};
pub use stage::{PipelineStage, default_stages, initial_stage_id, resolve_stage_id};
