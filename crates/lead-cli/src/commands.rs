//! Subcommand implementations.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use lead_import::{ImportOptions, ImportOutcome, UuidGenerator};
use lead_ingest::{lead_template_csv, parse_csv};
use lead_map::MappingState;
use lead_model::{PipelineStage, SocialPlatform, default_stages};
use lead_store::{JsonFileStore, LeadStore};
use tracing::{info, info_span};

use lead_cli::pipeline::{load_override_file, load_stage_file, run_pipeline};
use lead_cli::report::ImportReport;

use crate::cli::{ExportArgs, ImportArgs, PreviewArgs, StagesArgs, TemplateArgs};
use crate::summary::{print_import_summary, print_mapping, print_preview, print_stages};

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let bytes = fs::read(&args.csv_file)
        .with_context(|| format!("read {}", args.csv_file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let stages = load_stages(args.stages.as_deref())?;
    let options =
        ImportOptions::for_stages(stages).context("stage configuration has no stages")?;
    let overrides = args
        .mapping
        .as_deref()
        .map(load_override_file)
        .transpose()?;

    let mut ids = UuidGenerator;
    let run = run_pipeline(&text, overrides.as_ref(), &options, &mut ids)?;

    let report = args
        .report
        .as_deref()
        .map(|path| (path, ImportReport::new(&args.csv_file, &bytes, args.dry_run, &run.outcome)));

    let ImportOutcome { records, stats } = run.outcome;
    let destination = if args.dry_run {
        info!(records = records.len(), "dry run: nothing persisted");
        "(dry run, not persisted)".to_string()
    } else {
        let persist_start = Instant::now();
        let added = info_span!("persist").in_scope(|| -> Result<usize> {
            let mut store = JsonFileStore::open(&args.store)
                .with_context(|| format!("open lead store {}", args.store.display()))?;
            store
                .insert_many(records)
                .with_context(|| format!("save leads to {}", args.store.display()))
        })?;
        info!(
            added,
            duration_ms = persist_start.elapsed().as_millis(),
            "persist complete"
        );
        args.store.display().to_string()
    };

    print_import_summary(&stats, &destination);

    if let Some((path, report)) = report {
        report.write(path)?;
        println!("Report: {}", path.display());
    }
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let bytes = fs::read(&args.csv_file)
        .with_context(|| format!("read {}", args.csv_file.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let table = parse_csv(&text).context("parse CSV input")?;
    let mapping = MappingState::from_headers(table.headers());

    print_preview(&table);
    print_mapping(&mapping);
    Ok(())
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            fs::write(path, lead_template_csv())
                .with_context(|| format!("write template {}", path.display()))?;
            println!("Template: {}", path.display());
        }
        None => print!("{}", lead_template_csv()),
    }
    Ok(())
}

pub fn run_stages(args: &StagesArgs) -> Result<()> {
    let stages = load_stages(args.stages.as_deref())?;
    print_stages(&stages);
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let store = JsonFileStore::open(&args.store)
        .with_context(|| format!("open lead store {}", args.store.display()))?;
    let leads = store.all().context("read lead store")?;

    // Export goes through a real CSV encoder; only the import tokenizer
    // is naive about quoting.
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("create {}", args.output.display()))?;
    writer
        .write_record([
            "Id",
            "First Name",
            "Last Name",
            "Email",
            "Company",
            "Phone",
            "LinkedIn",
            "Twitter",
            "Facebook",
            "Instagram",
            "Status",
            "Assigned To",
            "Notes",
            "Source",
        ])
        .context("write export header")?;
    for lead in &leads {
        let social = |platform: SocialPlatform| {
            lead.social_profiles
                .get(&platform)
                .map_or("", String::as_str)
        };
        writer
            .write_record([
                lead.id.as_str(),
                lead.first_name.as_str(),
                lead.last_name.as_str(),
                lead.email.as_str(),
                lead.company.as_str(),
                lead.phone.as_str(),
                social(SocialPlatform::Linkedin),
                social(SocialPlatform::Twitter),
                social(SocialPlatform::Facebook),
                social(SocialPlatform::Instagram),
                lead.status.as_str(),
                lead.assigned_to.as_str(),
                lead.notes.as_str(),
                lead.source.as_str(),
            ])
            .context("write export row")?;
    }
    writer.flush().context("flush export file")?;

    info!(leads = leads.len(), output = %args.output.display(), "exported leads");
    println!("Exported {} leads to {}", leads.len(), args.output.display());
    Ok(())
}

fn load_stages(path: Option<&Path>) -> Result<Vec<PipelineStage>> {
    match path {
        Some(path) => load_stage_file(path),
        None => Ok(default_stages()),
    }
}
