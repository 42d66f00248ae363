use serde::{Deserialize, Serialize};

/// Category of a detected normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeKind {
    FrontmatterAdded,
    FrontmatterNormalized,
    FormattingNormalized,
    TagsNormalized,
    WikilinksNormalized,
}

impl ChangeKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FrontmatterAdded => "frontmatter-added",
            Self::FrontmatterNormalized => "frontmatter-normalized",
            Self::FormattingNormalized => "formatting-normalized",
            Self::TagsNormalized => "tags-normalized",
            Self::WikilinksNormalized => "wikilinks-normalized",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified change in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub kind: ChangeKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

impl Change {
    pub fn new(kind: ChangeKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            line_number: None,
        }
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

/// Before/after comparison of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    /// Vault-relative path of the document.
    pub path: String,
    /// Display name (file name without extension).
    pub name: String,
    /// Detected changes, ordered frontmatter, formatting, tags, wikilinks.
    pub changes: Vec<Change>,
    pub original: String,
    pub normalized: String,
}

impl ChangeReport {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ChangeKind> + '_ {
        self.changes.iter().map(|change| change.kind)
    }
}
