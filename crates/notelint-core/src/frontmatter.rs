//! Frontmatter detection, generation and injection.
//!
//! Existing headers are never rewritten; only a missing header is corrected.
//! Once a header exists [`enforce`] is a no-op, which makes it idempotent.

use chrono::{Local, NaiveDate};
use notelint_model::FrontmatterSettings;

use crate::patterns::NON_ID_RUN;

/// Frontmatter delimiter line.
pub const DELIMITER: &str = "---";

/// A header split from its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Text between the opening and closing delimiters.
    pub header: &'a str,
    /// Everything after the closing delimiter.
    pub body: &'a str,
}

/// True if the content, ignoring leading whitespace, starts with `---`.
pub fn has_frontmatter(content: &str) -> bool {
    content.trim_start().starts_with(DELIMITER)
}

/// Split the header from the body.
///
/// Returns `None` when the closing `\n---` delimiter is missing.
pub fn extract_frontmatter(content: &str) -> Option<Frontmatter<'_>> {
    let open = content.find(DELIMITER)?;
    let after_open = open + DELIMITER.len();
    let close = after_open + content[after_open..].find("\n---")?;
    let header = &content[after_open..close];
    let header = header
        .strip_prefix("\r\n")
        .or_else(|| header.strip_prefix('\n'))
        .unwrap_or(header);
    let body = &content[close + "\n---".len()..];
    Some(Frontmatter { header, body })
}

/// Render the configured template for `file_name`, dated today.
///
/// Returns an empty string when enforcement is disabled.
pub fn generate_frontmatter(settings: &FrontmatterSettings, file_name: &str) -> String {
    generate_frontmatter_on(settings, file_name, Local::now().date_naive())
}

/// Render the configured template for `file_name` with an explicit date.
pub fn generate_frontmatter_on(
    settings: &FrontmatterSettings,
    file_name: &str,
    date: NaiveDate,
) -> String {
    if !settings.enforce {
        return String::new();
    }
    let title = title_from_file_name(file_name);
    let inner = template_body(&settings.template)
        .replace("{{id}}", &generate_id(title))
        .replace("{{title}}", title)
        .replace("{{date}}", &date.format("%Y-%m-%d").to_string());
    if inner.is_empty() {
        format!("{DELIMITER}\n{DELIMITER}")
    } else {
        format!("{DELIMITER}\n{inner}\n{DELIMITER}")
    }
}

/// Derive a slug identifier from a title.
///
/// # Example
/// ```
/// use notelint_core::frontmatter::generate_id;
///
/// assert_eq!(generate_id("My Great Note!"), "my-great-note");
/// ```
pub fn generate_id(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ID_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Prepend a generated header when the document has none.
pub fn enforce(settings: &FrontmatterSettings, content: &str, file_name: &str) -> String {
    enforce_on(settings, content, file_name, Local::now().date_naive())
}

/// [`enforce`] with an explicit date.
pub fn enforce_on(
    settings: &FrontmatterSettings,
    content: &str,
    file_name: &str,
    date: NaiveDate,
) -> String {
    if !settings.enforce || has_frontmatter(content) {
        return content.to_string();
    }
    let header = generate_frontmatter_on(settings, file_name, date);
    format!("{header}\n\n{content}")
}

/// File name with one trailing `.md` removed.
pub fn title_from_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(".md").unwrap_or(file_name)
}

/// Template text between its delimiter lines.
///
/// Only whole `---` lines at either end of the template are dropped, before
/// placeholders are filled in.
fn template_body(template: &str) -> &str {
    let body = template.trim_matches(['\n', '\r']);
    let body = match body.split_once('\n') {
        Some((first, rest)) if is_delimiter_line(first) => rest,
        None if is_delimiter_line(body) => "",
        _ => body,
    };
    let body = match body.rsplit_once('\n') {
        Some((rest, last)) if is_delimiter_line(last) => rest,
        None if is_delimiter_line(body) => "",
        _ => body,
    };
    body.trim_matches(['\n', '\r'])
}

fn is_delimiter_line(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
