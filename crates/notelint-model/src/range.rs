use serde::{Deserialize, Serialize};

/// Classification of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeKind {
    CodeBlock,
    InlineCode,
    Heading,
    Wikilink,
    Tag,
}

impl RangeKind {
    pub const fn all() -> &'static [RangeKind] {
        &[
            Self::CodeBlock,
            Self::InlineCode,
            Self::Heading,
            Self::Wikilink,
            Self::Tag,
        ]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CodeBlock => "code-block",
            Self::InlineCode => "inline-code",
            Self::Heading => "heading",
            Self::Wikilink => "wikilink",
            Self::Tag => "tag",
        }
    }

    /// Code spans whose content must not be rewritten.
    pub const fn is_protected(&self) -> bool {
        matches!(self, Self::CodeBlock | Self::InlineCode)
    }
}

/// A half-open byte interval `[start, end)` into one content string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
    pub kind: RangeKind,
    pub text: String,
}

impl TextRange {
    pub fn contains(&self, position: usize) -> bool {
        self.start <= position && position < self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
