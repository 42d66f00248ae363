//! Wikilink detection and path-style rewriting.
//!
//! Only the `shortest` style rewrites paths here. `relative` and `absolute`
//! need an index of the vault to resolve against and are left untouched.

use notelint_model::{WikilinkSettings, WikilinkStyle};
use regex::Captures;

use crate::patterns::WIKILINK;

const MARKDOWN_EXTENSION: &str = ".md";

/// Inner text (target plus optional alias) of every wikilink, in order.
pub fn extract_wikilinks(content: &str) -> Vec<String> {
    WIKILINK
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Rewrite the target of one wikilink's inner text.
pub fn normalize_wikilink_path(settings: &WikilinkSettings, inner: &str) -> String {
    if !settings.safe_insertion {
        return inner.to_string();
    }
    let (link_path, alias) = match inner.split_once('|') {
        Some((path, alias)) => (path, Some(alias.trim())),
        None => (inner, None),
    };
    let link_path = match settings.style {
        WikilinkStyle::Shortest => shortest_path(link_path),
        WikilinkStyle::Relative | WikilinkStyle::Absolute => link_path,
    };
    match alias {
        Some(alias) if !alias.is_empty() => format!("{link_path}|{alias}"),
        _ => link_path.to_string(),
    }
}

/// Rewrite every wikilink in `content`.
pub fn normalize(settings: &WikilinkSettings, content: &str) -> String {
    if !settings.safe_insertion {
        return content.to_string();
    }
    WIKILINK
        .replace_all(content, |caps: &Captures<'_>| {
            format!("[[{}]]", normalize_wikilink_path(settings, &caps[1]))
        })
        .into_owned()
}

/// Final path segment without `.md`.
///
/// A target that would become empty (`folder/`, `.md`) is kept as written.
fn shortest_path(link_path: &str) -> &str {
    let mut name = link_path
        .rsplit_once('/')
        .map_or(link_path, |(_, last)| last);
    while let Some(stripped) = name.strip_suffix(MARKDOWN_EXTENSION) {
        name = stripped;
    }
    if name.is_empty() { link_path } else { name }
}
