//! Terminal tables for previews, mappings, stages, and import results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lead_import::ImportStats;
use lead_ingest::RawCsvTable;
use lead_map::{MappingOrigin, MappingState};
use lead_model::PipelineStage;

/// First rows of the parsed table, headers as columns.
pub fn print_preview(table: &RawCsvTable) {
    let mut out = Table::new();
    out.set_header(table.headers().iter().map(|h| header_cell(h)));
    apply_table_style(&mut out);
    for row in table.preview() {
        out.add_row(row.clone());
    }
    println!("{out}");
    println!(
        "Showing {} of {} data rows",
        table.preview().len(),
        table.row_count()
    );
}

/// The working mapping: one row per CSV header, in table order.
pub fn print_mapping(state: &MappingState) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Header"),
        header_cell("Field"),
        header_cell("Origin"),
    ]);
    apply_table_style(&mut out);
    for header in state.headers() {
        match state.entry(header) {
            Some(entry) => {
                let origin = match entry.origin {
                    MappingOrigin::Inferred => "inferred",
                    MappingOrigin::Manual => "manual",
                };
                out.add_row(vec![
                    Cell::new(header),
                    Cell::new(entry.field.as_str()),
                    Cell::new(origin),
                ]);
            }
            None => {
                out.add_row(vec![
                    Cell::new(header),
                    dim_cell("(unmapped)"),
                    dim_cell("-"),
                ]);
            }
        }
    }
    println!("{out}");
}

pub fn print_stages(stages: &[PipelineStage]) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("#"),
        header_cell("Id"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 0, CellAlignment::Right);
    for (index, stage) in stages.iter().enumerate() {
        let name = if index == 0 {
            format!("{} (initial)", stage.name)
        } else {
            stage.name.clone()
        };
        out.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&stage.id),
            Cell::new(name),
        ]);
    }
    println!("{out}");
}

/// The "imported N of M" accounting plus where the records went.
pub fn print_import_summary(stats: &ImportStats, destination: &str) {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Rows in"),
        header_cell("Imported"),
        header_cell("Blank"),
        header_cell("No email"),
        header_cell("No name"),
    ]);
    apply_table_style(&mut out);
    for index in 0..5 {
        align_column(&mut out, index, CellAlignment::Right);
    }
    out.add_row(vec![
        Cell::new(stats.rows_in),
        Cell::new(stats.imported)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        count_cell(stats.skipped_blank, Color::Yellow),
        count_cell(stats.skipped_no_email, Color::Yellow),
        count_cell(stats.skipped_no_name, Color::Yellow),
    ]);
    println!("{out}");
    println!(
        "Imported {} of {} rows ({} skipped) -> {destination}",
        stats.imported,
        stats.rows_in,
        stats.skipped()
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
