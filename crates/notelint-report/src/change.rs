//! Classify what normalization changed in a document.
//!
//! The classification only looks at the before/after strings, never at which
//! pipeline steps ran. The four checks are independent, so one document can
//! report every kind.

use notelint_core::{extract_frontmatter, find_tags, find_wikilinks, has_frontmatter};
use notelint_model::{Change, ChangeKind, ChangeReport, TextRange};

/// Compare `original` with `normalized` and list the detected changes.
pub fn generate_change_report(
    path: impl Into<String>,
    name: impl Into<String>,
    original: &str,
    normalized: &str,
) -> ChangeReport {
    let changes = if original == normalized {
        Vec::new()
    } else {
        classify(original, normalized)
    };
    ChangeReport {
        path: path.into(),
        name: name.into(),
        changes,
        original: original.to_string(),
        normalized: normalized.to_string(),
    }
}

fn classify(original: &str, normalized: &str) -> Vec<Change> {
    let mut changes = Vec::new();
    if let Some(change) = frontmatter_change(original, normalized) {
        changes.push(change);
    }
    if only_blank_structure_differs(original, normalized) {
        changes.push(Change::new(
            ChangeKind::FormattingNormalized,
            "Normalized formatting (line endings, blank lines, trailing newline)",
        ));
    }
    if let Some(count) = token_change(find_tags(original), find_tags(normalized)) {
        changes.push(Change::new(
            ChangeKind::TagsNormalized,
            describe("tag", count),
        ));
    }
    if let Some(count) = token_change(find_wikilinks(original), find_wikilinks(normalized)) {
        changes.push(Change::new(
            ChangeKind::WikilinksNormalized,
            describe("wikilink", count),
        ));
    }
    changes
}

fn frontmatter_change(original: &str, normalized: &str) -> Option<Change> {
    match (has_frontmatter(original), has_frontmatter(normalized)) {
        (false, true) => {
            Some(Change::new(ChangeKind::FrontmatterAdded, "Added frontmatter header").at_line(1))
        }
        (true, true) => {
            let before = extract_frontmatter(original).map(|parts| parts.header);
            let after = extract_frontmatter(normalized).map(|parts| parts.header);
            (before != after).then(|| {
                Change::new(ChangeKind::FrontmatterNormalized, "Normalized frontmatter header")
                    .at_line(1)
            })
        }
        _ => None,
    }
}

/// Equal once blank and whitespace-only lines are dropped.
fn only_blank_structure_differs(original: &str, normalized: &str) -> bool {
    original != normalized && non_blank_lines(original) == non_blank_lines(normalized)
}

fn non_blank_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Number of original tokens rewritten, or `None` if the sorted token lists
/// are identical.
fn token_change(original: Vec<TextRange>, normalized: Vec<TextRange>) -> Option<usize> {
    let mut before: Vec<String> = original.into_iter().map(|range| range.text).collect();
    let mut after: Vec<String> = normalized.into_iter().map(|range| range.text).collect();
    before.sort();
    after.sort();
    if before == after {
        return None;
    }
    Some(count_missing(&before, &after))
}

/// Count entries of sorted `before` that have no partner in sorted `after`.
fn count_missing(before: &[String], after: &[String]) -> usize {
    let mut missing = 0;
    let mut j = 0;
    for token in before {
        while j < after.len() && after[j] < *token {
            j += 1;
        }
        if j < after.len() && after[j] == *token {
            j += 1;
        } else {
            missing += 1;
        }
    }
    missing
}

fn describe(noun: &str, count: usize) -> String {
    match count {
        0 => format!("Normalized {noun}s"),
        1 => format!("Normalized 1 {noun}"),
        n => format!("Normalized {n} {noun}s"),
    }
}
