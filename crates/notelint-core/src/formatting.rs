//! Whitespace normalization: line endings, blank-line runs, trailing newline.
//!
//! Each step is a fixed point of itself, and no step reintroduces what an
//! earlier one removed, so [`normalize`] is idempotent.

use notelint_model::FormattingSettings;

use crate::patterns::{BLANK_LINE_RUN, CRLF};

/// Apply the enabled formatting steps in order.
pub fn normalize(settings: &FormattingSettings, content: &str) -> String {
    if !settings.normalize {
        return content.to_string();
    }
    let mut result = normalize_line_endings(content);
    if settings.remove_multiple_blank_lines {
        result = remove_multiple_blank_lines(&result);
    }
    if settings.end_with_newline {
        result = ensure_trailing_newline(&result);
    }
    result
}

/// Replace CRLF with LF.
///
/// Stray carriage returns directly before a line feed are folded into it, so
/// `\r\r\n` becomes `\n` in one pass.
pub fn normalize_line_endings(content: &str) -> String {
    CRLF.replace_all(content, "\n").into_owned()
}

/// Collapse three or more consecutive newlines into two.
pub fn remove_multiple_blank_lines(content: &str) -> String {
    BLANK_LINE_RUN.replace_all(content, "\n\n").into_owned()
}

/// Strip trailing whitespace and end with exactly one newline.
pub fn ensure_trailing_newline(content: &str) -> String {
    let mut result = content.trim_end().to_string();
    result.push('\n');
    result
}
