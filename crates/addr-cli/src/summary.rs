use std::path::PathBuf;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_core::RunSummary;

/// Outcome of a `run` invocation, for the terminal summary.
pub struct RunReport {
    pub summary: RunSummary,
    /// Written output path; `None` on a dry run.
    pub output: Option<PathBuf>,
}

pub fn print_run_report(report: &RunReport) {
    let summary = &report.summary;
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!(
        "Partitions: {} loaded, {} missing",
        summary.partitions_loaded.len(),
        summary.partitions_missing.len()
    );
    if !summary.partitions_missing.is_empty() {
        println!("Missing: {}", summary.partitions_missing.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![Cell::new("Loaded"), Cell::new(summary.rows_loaded)]);
    table.add_row(vec![
        Cell::new("After required-field filter"),
        Cell::new(summary.rows_after_required),
    ]);
    table.add_row(vec![
        Cell::new("After cleanup rules"),
        Cell::new(summary.rows_after_rules),
    ]);
    table.add_row(vec![
        Cell::new("Canonicalized"),
        Cell::new(summary.rows_output)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
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
