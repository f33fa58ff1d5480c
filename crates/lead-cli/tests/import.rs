//! End-to-end import scenarios: CSV text through the pipeline and into
//! the JSON store.

use std::path::Path;

use lead_cli::pipeline::{MappingOverrides, PipelineRun, run_pipeline};
use lead_cli::report::ImportReport;
use lead_import::{ImportOptions, SequentialGenerator};
use lead_model::{LeadField, LeadSource, default_stages};
use lead_store::{JsonFileStore, LeadStore};

const FIXTURE: &str = "First Name,Last Name,Email,Company\n\
                       John,Doe,john@example.com,Acme\n\
                       ,,,\n\
                       Jane,,jane@example.com,\n";

fn run_fixture() -> PipelineRun {
    let options = ImportOptions::new("new", default_stages());
    let mut ids = SequentialGenerator::default();
    run_pipeline(FIXTURE, None, &options, &mut ids).unwrap()
}

#[test]
fn imports_two_of_three_rows() {
    let run = run_fixture();
    let records = &run.outcome.records;
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].first_name, "John");
    assert_eq!(records[0].last_name, "Doe");
    assert_eq!(records[0].email, "john@example.com");
    assert_eq!(records[0].company, "Acme");
    assert_eq!(records[0].status, "new");
    assert_eq!(records[0].source, LeadSource::Csv);

    assert_eq!(records[1].first_name, "Jane");
    assert_eq!(records[1].last_name, "");
    assert_eq!(records[1].email, "jane@example.com");
    assert_eq!(records[1].company, "");

    assert_eq!(run.outcome.stats.rows_in, 3);
    assert_eq!(run.outcome.stats.imported, 2);
    assert_eq!(run.outcome.stats.skipped_blank, 1);
}

#[test]
fn imported_records_round_trip_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");

    let run = run_fixture();
    let mut store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.insert_many(run.outcome.records).unwrap(), 2);

    let reopened = JsonFileStore::open(&path).unwrap();
    let leads = reopened.all().unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id, "lead-1");
    assert_eq!(leads[1].email, "jane@example.com");
}

#[test]
fn dry_runs_touch_nothing_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.json");

    // A dry run exercises the pipeline but never the store; opening a
    // store does not create its file either.
    let run = run_fixture();
    assert_eq!(run.outcome.records.len(), 2);
    let store = JsonFileStore::open(&path).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists());
}

#[test]
fn overrides_reach_the_emitted_records() {
    let text = "Full,Email,Notes\nJane Doe,jane@x.com,called twice\n";
    let overrides = MappingOverrides::from([("Full".to_string(), Some(LeadField::FullName))]);
    let options = ImportOptions::new("new", default_stages());
    let mut ids = SequentialGenerator::default();
    let run = run_pipeline(text, Some(&overrides), &options, &mut ids).unwrap();

    let record = &run.outcome.records[0];
    assert_eq!(record.first_name, "Jane");
    assert_eq!(record.last_name, "Doe");
    assert_eq!(record.notes, "called twice");
}

#[test]
fn report_shape_is_stable() {
    let run = run_fixture();
    let report = ImportReport::new(
        Path::new("batch/leads.csv"),
        FIXTURE.as_bytes(),
        false,
        &run.outcome,
    );

    let mut json = serde_json::to_value(&report).unwrap();
    json["sha256"] = "[sha256]".into();
    json["createdAt"] = "[timestamp]".into();
    insta::assert_snapshot!(serde_json::to_string_pretty(&json).unwrap(), @r#"
    {
      "createdAt": "[timestamp]",
      "dryRun": false,
      "imported": 2,
      "rowsIn": 3,
      "sha256": "[sha256]",
      "skippedBlank": 1,
      "skippedNoEmail": 0,
      "skippedNoName": 0,
      "sourceFile": "leads.csv",
      "stageCounts": {
        "new": 2
      },
      "unknownStatus": 0
    }
    "#);
}
