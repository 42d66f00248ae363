//! Markdown note normalization.
//!
//! The rules are pure functions of a string and a settings section:
//!
//! - [`frontmatter`]: insert a metadata header when missing
//! - [`formatting`]: line endings, blank lines, trailing newline
//! - [`tags`]: inline tag case
//! - [`wikilinks`]: wikilink target style
//!
//! [`NormalizationPipeline`] runs them in a fixed order. [`scanner`] locates
//! code spans and structural ranges for callers that need offsets.

pub mod formatting;
pub mod frontmatter;
pub mod patterns;
pub mod pipeline;
pub mod scanner;
pub mod tags;
pub mod wikilinks;

pub use frontmatter::{
    Frontmatter, enforce as enforce_frontmatter, extract_frontmatter, generate_frontmatter,
    generate_id, has_frontmatter,
};
pub use pipeline::{
    DocumentContext, FormattingStep, FrontmatterStep, NormalizationPipeline, NormalizationStep,
    TagStep, WikilinkStep, normalize,
};
pub use scanner::{
    find_code_blocks, find_headings, find_inline_code, find_ranges, find_tags, find_wikilinks,
    get_protected_ranges, is_in_range, scan_all,
};
pub use tags::{extract_tags, normalize_tag};
pub use wikilinks::{extract_wikilinks, normalize_wikilink_path};
