//! Range scanning over raw note content.
//!
//! Each scan returns the ranges of one [`RangeKind`] ordered by start offset.
//! Offsets are byte offsets into the scanned string. Ranges of the same kind
//! never overlap; ranges of different kinds may.

use notelint_model::{RangeKind, TextRange};
use regex::Regex;

use crate::patterns::{CODE_BLOCK, HEADING, INLINE_CODE, TAG, WIKILINK};

/// Scan `content` for every range of the given kind.
pub fn find_ranges(content: &str, kind: RangeKind) -> Vec<TextRange> {
    collect(pattern_for(kind), content, kind)
}

pub fn find_code_blocks(content: &str) -> Vec<TextRange> {
    find_ranges(content, RangeKind::CodeBlock)
}

pub fn find_inline_code(content: &str) -> Vec<TextRange> {
    find_ranges(content, RangeKind::InlineCode)
}

pub fn find_headings(content: &str) -> Vec<TextRange> {
    find_ranges(content, RangeKind::Heading)
}

pub fn find_wikilinks(content: &str) -> Vec<TextRange> {
    find_ranges(content, RangeKind::Wikilink)
}

/// Tag ranges. The `#` of a URL fragment or a fenced block is included; filter
/// with [`get_protected_ranges`] when that matters.
pub fn find_tags(content: &str) -> Vec<TextRange> {
    find_ranges(content, RangeKind::Tag)
}

/// Code block and inline code ranges, merged and sorted by start.
pub fn get_protected_ranges(content: &str) -> Vec<TextRange> {
    let mut ranges = find_code_blocks(content);
    ranges.extend(find_inline_code(content));
    ranges.sort_by_key(|range| range.start);
    ranges
}

/// True if `position` falls inside any of `ranges`.
pub fn is_in_range(position: usize, ranges: &[TextRange]) -> bool {
    ranges.iter().any(|range| range.contains(position))
}

/// All ranges of every kind, sorted by start then kind.
pub fn scan_all(content: &str) -> Vec<TextRange> {
    let mut ranges: Vec<TextRange> = RangeKind::all()
        .iter()
        .flat_map(|kind| find_ranges(content, *kind))
        .collect();
    ranges.sort_by(|a, b| a.start.cmp(&b.start).then(a.kind.cmp(&b.kind)));
    ranges
}

fn pattern_for(kind: RangeKind) -> &'static Regex {
    match kind {
        RangeKind::CodeBlock => &CODE_BLOCK,
        RangeKind::InlineCode => &INLINE_CODE,
        RangeKind::Heading => &HEADING,
        RangeKind::Wikilink => &WIKILINK,
        RangeKind::Tag => &TAG,
    }
}

fn collect(pattern: &Regex, content: &str, kind: RangeKind) -> Vec<TextRange> {
    pattern
        .find_iter(content)
        .map(|found| TextRange {
            start: found.start(),
            end: found.end(),
            kind,
            text: found.as_str().to_string(),
        })
        .collect()
}
