//! Shared types for the notelint crates.

pub mod range;
pub mod report;
pub mod settings;

pub use range::{RangeKind, TextRange};
pub use report::{Change, ChangeKind, ChangeReport};
pub use settings::{
    DEFAULT_FRONTMATTER_TEMPLATE, DEFAULT_REPORT_DIR, FormattingSettings, FrontmatterSettings,
    LintSettings, ReportSettings, TagFormat, TagSettings, WikilinkSettings, WikilinkStyle,
};
