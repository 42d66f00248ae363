use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use notelint_cli::batch::{BatchOutcome, RunMode};
use notelint_model::{ChangeKind, ChangeReport};
use notelint_report::tally_change_kinds;

use crate::types::RunResult;

/// Change kinds shown as columns of the per-file table.
const KIND_COLUMNS: [(&str, &[ChangeKind]); 4] = [
    (
        "Frontmatter",
        &[ChangeKind::FrontmatterAdded, ChangeKind::FrontmatterNormalized],
    ),
    ("Formatting", &[ChangeKind::FormattingNormalized]),
    ("Tags", &[ChangeKind::TagsNormalized]),
    ("Wikilinks", &[ChangeKind::WikilinksNormalized]),
];

pub fn print_summary(result: &RunResult) {
    let outcome = &result.outcome;
    println!("Target: {}", result.target.display());
    println!("Mode: {}", result.mode.label());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    let changed: Vec<&ChangeReport> = outcome
        .reports
        .iter()
        .filter(|report| report.has_changes())
        .collect();
    if !changed.is_empty() {
        print_change_table(&changed, result.mode);
    }
    print_totals_table(outcome);
    print_kind_table(outcome);
    print_errors(outcome);
}

/// Failures go to stderr even when the tables are suppressed.
pub fn print_errors(outcome: &BatchOutcome) {
    if outcome.errors.is_empty() {
        return;
    }
    eprintln!("Errors:");
    for error in &outcome.errors {
        eprintln!("- {error}");
    }
}

fn print_change_table(changed: &[&ChangeReport], mode: RunMode) {
    let mut table = Table::new();
    let mut header = vec![header_cell("Note")];
    header.extend(KIND_COLUMNS.iter().map(|(label, _)| header_cell(label)));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 1..=KIND_COLUMNS.len() {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for report in changed {
        let mut row = vec![Cell::new(&report.path)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)];
        row.extend(
            KIND_COLUMNS
                .iter()
                .map(|(_, kinds)| mark_cell(report.kinds().any(|kind| kinds.contains(&kind)))),
        );
        table.add_row(row);
    }
    println!();
    match mode {
        RunMode::Apply => println!("Normalized:"),
        RunMode::DryRun => println!("Would normalize:"),
    }
    println!("{table}");
}

fn print_totals_table(outcome: &BatchOutcome) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Checked"),
        header_cell("Changed"),
        header_cell("Unchanged"),
        header_cell("Written"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.checked()).add_attribute(Attribute::Bold),
        count_cell(outcome.changed(), Color::Yellow),
        dim_cell(outcome.unchanged),
        count_cell(outcome.written.len(), Color::Green),
        count_cell(outcome.errors.len(), Color::Red),
    ]);
    println!();
    println!("{table}");
}

fn print_kind_table(outcome: &BatchOutcome) {
    let tally = tally_change_kinds(&outcome.reports);
    if tally.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Change"), header_cell("Notes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, count) in tally {
        table.add_row(vec![Cell::new(kind), Cell::new(count)]);
    }
    println!("{table}");
}

fn mark_cell(present: bool) -> Cell {
    if present {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(11)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
