//! Console rendering for lookup reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::filter::{LookupOutcome, LookupReport};

/// Print a lookup report to stdout.
///
/// The found path prints a header naming the key, standard, resolved
/// version and extensibility, then one row per term submission value.
/// The not-found path prints an explicit notice; it is a normal
/// outcome, not an error.
pub fn print_report(report: &LookupReport) {
    match &report.outcome {
        LookupOutcome::NotFound => {
            println!(
                "Value not found: no codelist matched {}={} in {} CT {}",
                report.kind.label(),
                report.key,
                report.standard,
                report.version
            );
        }
        LookupOutcome::Found { rows, extensible } => {
            let codelist_name = rows
                .first()
                .map(|row| row.codelist_name.as_str())
                .unwrap_or_default();
            println!(
                "Terms for {}={} ({}) - {} CT {}, Extensible: {}",
                report.kind.label(),
                report.key,
                codelist_name,
                report.standard,
                report.version,
                if *extensible { "Yes" } else { "No" }
            );
            let mut table = Table::new();
            table.set_header(vec![header_cell("Submission Value")]);
            apply_table_style(&mut table);
            for row in rows {
                table.add_row(vec![Cell::new(&row.submission_value)]);
            }
            println!("{table}");
            println!("{} term(s)", rows.len());
        }
    }
}

/// Shared table styling for terminology output.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Cyan bold header cell, shared across report tables.
pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}
