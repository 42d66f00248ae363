//! Lint settings, one section per normalization rule.
//!
//! Settings are persisted as TOML. Every section carries `#[serde(default)]`
//! so a partial file merges with the defaults below.

use serde::{Deserialize, Serialize};

/// Default frontmatter template used when none is configured.
pub const DEFAULT_FRONTMATTER_TEMPLATE: &str = "---\nid: {{id}}\ntitle: {{title}}\ndate: {{date}}\n---";

/// Default directory (relative to the vault root) for collection reports.
pub const DEFAULT_REPORT_DIR: &str = "lint-reports";

// ============================================================================
// Main Settings Struct
// ============================================================================

/// Complete lint configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintSettings {
    pub frontmatter: FrontmatterSettings,
    pub formatting: FormattingSettings,
    pub tags: TagSettings,
    pub wikilinks: WikilinkSettings,
    pub report: ReportSettings,
}

impl LintSettings {
    /// Settings with every rule switched off.
    ///
    /// Only the enable switches change; templates, formats and styles keep
    /// their defaults so turning one rule back on behaves like the default.
    pub fn disabled() -> Self {
        Self {
            frontmatter: FrontmatterSettings {
                enforce: false,
                ..FrontmatterSettings::default()
            },
            formatting: FormattingSettings {
                normalize: false,
                ..FormattingSettings::default()
            },
            tags: TagSettings {
                enforce: false,
                ..TagSettings::default()
            },
            wikilinks: WikilinkSettings {
                safe_insertion: false,
                ..WikilinkSettings::default()
            },
            report: ReportSettings::default(),
        }
    }

    /// True if at least one rule may rewrite content.
    pub fn any_rule_enabled(&self) -> bool {
        self.frontmatter.enforce
            || self.formatting.normalize
            || self.tags.enforce
            || self.wikilinks.safe_insertion
    }
}

// ============================================================================
// Frontmatter
// ============================================================================

/// Metadata header enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontmatterSettings {
    /// Insert a header into documents that lack one.
    pub enforce: bool,
    /// Header template; `{{id}}`, `{{title}}` and `{{date}}` are substituted.
    pub template: String,
}

impl Default for FrontmatterSettings {
    fn default() -> Self {
        Self {
            enforce: true,
            template: DEFAULT_FRONTMATTER_TEMPLATE.to_string(),
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Whitespace normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingSettings {
    /// Parent switch; line endings are normalized whenever this is on.
    pub normalize: bool,
    /// Strip trailing whitespace and end the document with exactly one newline.
    pub end_with_newline: bool,
    /// Keep at most one blank line between paragraphs.
    pub remove_multiple_blank_lines: bool,
}

impl Default for FormattingSettings {
    fn default() -> Self {
        Self {
            normalize: true,
            end_with_newline: true,
            remove_multiple_blank_lines: true,
        }
    }
}

// ============================================================================
// Tags
// ============================================================================

/// Case style applied to inline tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TagFormat {
    #[default]
    #[serde(rename = "lowercase")]
    Lowercase,
    #[serde(rename = "uppercase")]
    Uppercase,
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "none")]
    None,
}

impl TagFormat {
    pub const fn all() -> &'static [TagFormat] {
        &[Self::Lowercase, Self::Uppercase, Self::CamelCase, Self::None]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::CamelCase => "camelCase",
            Self::None => "none",
        }
    }
}

/// Inline tag rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub enforce: bool,
    pub format: TagFormat,
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            enforce: true,
            format: TagFormat::default(),
        }
    }
}

// ============================================================================
// Wikilinks
// ============================================================================

/// Path style applied to wikilink targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WikilinkStyle {
    /// Final path segment without the `.md` extension.
    #[default]
    Shortest,
    /// Path relative to the linking document (resolved by the host).
    Relative,
    /// Path from the vault root (resolved by the host).
    Absolute,
}

impl WikilinkStyle {
    pub const fn all() -> &'static [WikilinkStyle] {
        &[Self::Shortest, Self::Relative, Self::Absolute]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shortest => "shortest",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
        }
    }
}

/// Wikilink rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikilinkSettings {
    pub safe_insertion: bool,
    pub style: WikilinkStyle,
}

impl Default for WikilinkSettings {
    fn default() -> Self {
        Self {
            safe_insertion: true,
            style: WikilinkStyle::default(),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Where collection reports are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Directory relative to the vault root.
    pub output_dir: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_REPORT_DIR.to_string(),
        }
    }
}
