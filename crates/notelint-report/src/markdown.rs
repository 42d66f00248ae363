//! Markdown rendering of change reports.
//!
//! The output is for people to read. It is not meant to be parsed back.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use notelint_model::ChangeReport;

/// Unchanged documents are listed by path only up to this many.
pub const UNCHANGED_LIST_LIMIT: usize = 20;

/// Render the report for a single document.
pub fn format_report_as_markdown(report: &ChangeReport) -> String {
    let mut out = String::new();
    write_document_section(&mut out, report, "#");
    out
}

/// Render the aggregate report for a set of documents.
pub fn format_vault_report_as_markdown(reports: &[ChangeReport]) -> String {
    let (changed, unchanged): (Vec<&ChangeReport>, Vec<&ChangeReport>) =
        reports.iter().partition(|report| report.has_changes());

    let mut out = String::new();
    out.push_str("# Vault Lint Report\n\n");
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- Files checked: {}\n", reports.len()));
    out.push_str(&format!("- Files with changes: {}\n", changed.len()));
    out.push_str(&format!("- Files unchanged: {}\n", unchanged.len()));

    if !changed.is_empty() {
        out.push_str("\n## Change Types\n\n");
        for (kind, count) in tally_change_kinds(reports) {
            out.push_str(&format!("- {kind}: {count}\n"));
        }
        out.push_str("\n## Changed Files\n");
        for report in &changed {
            out.push('\n');
            write_document_section(&mut out, report, "###");
        }
    }

    if !unchanged.is_empty() && unchanged.len() <= UNCHANGED_LIST_LIMIT {
        out.push_str("\n## Unchanged Files\n\n");
        for report in &unchanged {
            out.push_str(&format!("- `{}`\n", report.path));
        }
    }
    out
}

/// Occurrences of each change kind across changed documents, keyed by kind
/// name.
pub fn tally_change_kinds(reports: &[ChangeReport]) -> BTreeMap<&'static str, usize> {
    let mut tally = BTreeMap::new();
    for kind in reports.iter().flat_map(ChangeReport::kinds) {
        *tally.entry(kind.as_str()).or_insert(0) += 1;
    }
    tally
}

/// `<collection>-lint-report-<timestamp>.md` with `:` and `.` in the ISO 8601
/// timestamp replaced by `-`.
pub fn report_file_name(collection: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{collection}-lint-report-{stamp}.md")
}

fn write_document_section(out: &mut String, report: &ChangeReport, heading: &str) {
    out.push_str(&format!("{heading} {}\n\n", report.name));
    out.push_str(&format!("Path: `{}`\n\n", report.path));
    if report.changes.is_empty() {
        out.push_str("No changes needed.\n");
        return;
    }
    for change in &report.changes {
        let line = match change.line_number {
            Some(line) => format!("- {} (line {line})\n", change.description),
            None => format!("- {}\n", change.description),
        };
        out.push_str(&line);
    }
}
