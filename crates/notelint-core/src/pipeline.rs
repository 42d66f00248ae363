//! Normalization pipeline with ordered step execution.
//!
//! Each rule implements [`NormalizationStep`] and the pipeline threads the
//! output of one step into the next.
//!
//! # Step Order
//!
//! 1. **FrontmatterStep** - Insert a header when missing
//! 2. **FormattingStep** - Line endings, blank lines, trailing newline
//! 3. **TagStep** - Rewrite tag case
//! 4. **WikilinkStep** - Rewrite wikilink targets
//!
//! The order is fixed. A header inserted by step 1 is followed by a blank line
//! that step 2 may collapse, and steps 3 and 4 see whitespace-normalized text.
//!
//! # Example
//!
//! ```
//! use notelint_core::NormalizationPipeline;
//! use notelint_model::LintSettings;
//!
//! let pipeline = NormalizationPipeline::new(LintSettings::disabled());
//! assert_eq!(pipeline.normalize("unchanged", "note.md"), "unchanged");
//! ```

use chrono::{Local, NaiveDate};
use notelint_model::LintSettings;
use tracing::{debug, trace};

use crate::{formatting, frontmatter, tags, wikilinks};

/// Per-document inputs shared by every step.
#[derive(Debug, Clone, Copy)]
pub struct DocumentContext<'a> {
    /// File name used for the generated title and id.
    pub file_name: &'a str,
    /// Date stamped into a generated header.
    pub date: NaiveDate,
}

/// A single rewrite applied to the whole document.
pub trait NormalizationStep: Send + Sync {
    /// Rewrite `content`. Must be deterministic and idempotent.
    fn apply(&self, content: &str, settings: &LintSettings, doc: &DocumentContext<'_>) -> String;

    /// Human-readable name for this step (for logging/debugging).
    fn step_name(&self) -> &str;

    /// Whether the current settings switch this step off.
    fn should_skip(&self, _settings: &LintSettings) -> bool {
        false
    }
}

/// Step 1: insert a frontmatter header.
pub struct FrontmatterStep;

impl NormalizationStep for FrontmatterStep {
    fn apply(&self, content: &str, settings: &LintSettings, doc: &DocumentContext<'_>) -> String {
        frontmatter::enforce_on(&settings.frontmatter, content, doc.file_name, doc.date)
    }

    fn step_name(&self) -> &str {
        "frontmatter"
    }

    fn should_skip(&self, settings: &LintSettings) -> bool {
        !settings.frontmatter.enforce
    }
}

/// Step 2: normalize whitespace.
pub struct FormattingStep;

impl NormalizationStep for FormattingStep {
    fn apply(&self, content: &str, settings: &LintSettings, _doc: &DocumentContext<'_>) -> String {
        formatting::normalize(&settings.formatting, content)
    }

    fn step_name(&self) -> &str {
        "formatting"
    }

    fn should_skip(&self, settings: &LintSettings) -> bool {
        !settings.formatting.normalize
    }
}

/// Step 3: rewrite tags.
pub struct TagStep;

impl NormalizationStep for TagStep {
    fn apply(&self, content: &str, settings: &LintSettings, _doc: &DocumentContext<'_>) -> String {
        tags::enforce(&settings.tags, content)
    }

    fn step_name(&self) -> &str {
        "tags"
    }

    fn should_skip(&self, settings: &LintSettings) -> bool {
        !settings.tags.enforce
    }
}

/// Step 4: rewrite wikilinks.
pub struct WikilinkStep;

impl NormalizationStep for WikilinkStep {
    fn apply(&self, content: &str, settings: &LintSettings, _doc: &DocumentContext<'_>) -> String {
        wikilinks::normalize(&settings.wikilinks, content)
    }

    fn step_name(&self) -> &str {
        "wikilinks"
    }

    fn should_skip(&self, settings: &LintSettings) -> bool {
        !settings.wikilinks.safe_insertion
    }
}

/// The four rules in their fixed order, bound to one settings snapshot.
pub struct NormalizationPipeline {
    settings: LintSettings,
    steps: Vec<Box<dyn NormalizationStep>>,
}

impl NormalizationPipeline {
    pub fn new(settings: LintSettings) -> Self {
        Self {
            settings,
            steps: vec![
                Box::new(FrontmatterStep),
                Box::new(FormattingStep),
                Box::new(TagStep),
                Box::new(WikilinkStep),
            ],
        }
    }

    pub fn settings(&self) -> &LintSettings {
        &self.settings
    }

    /// Replace the settings wholesale.
    pub fn update_settings(&mut self, settings: LintSettings) {
        self.settings = settings;
    }

    /// Normalize one document, dating any generated header today.
    pub fn normalize(&self, content: &str, file_name: &str) -> String {
        self.normalize_on(content, file_name, Local::now().date_naive())
    }

    /// Normalize one document with an explicit header date.
    pub fn normalize_on(&self, content: &str, file_name: &str, date: NaiveDate) -> String {
        let doc = DocumentContext { file_name, date };
        let mut current = content.to_string();
        let mut applied = Vec::new();
        for step in &self.steps {
            if step.should_skip(&self.settings) {
                continue;
            }
            let next = step.apply(&current, &self.settings, &doc);
            if next != current {
                trace!(step = step.step_name(), file_name, "step rewrote content");
                applied.push(step.step_name());
                current = next;
            }
        }
        debug!(
            file_name,
            changed = !applied.is_empty(),
            steps = ?applied,
            "normalized document"
        );
        current
    }

    /// List step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.step_name()).collect()
    }
}

impl Default for NormalizationPipeline {
    fn default() -> Self {
        Self::new(LintSettings::default())
    }
}

/// One-shot normalization without holding a pipeline.
pub fn normalize(settings: &LintSettings, content: &str, file_name: &str) -> String {
    NormalizationPipeline::new(settings.clone()).normalize(content, file_name)
}
