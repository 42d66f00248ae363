//! Run the pipeline over many documents.
//!
//! A failing document is recorded in [`BatchOutcome::errors`] and the batch
//! moves on. Only documents whose text changed are written back.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use notelint_core::NormalizationPipeline;
use notelint_model::ChangeReport;
use notelint_report::{format_vault_report_as_markdown, generate_change_report, report_file_name};
use tracing::{debug, info_span, warn};

use crate::store::{DocumentStore, Result};

/// Whether normalized text is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Apply,
    DryRun,
}

impl RunMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Apply }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::DryRun => "dry-run",
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// One report per document that could be read, in input order.
    pub reports: Vec<ChangeReport>,
    /// Documents rewritten on disk.
    pub written: Vec<PathBuf>,
    /// Documents whose report lists no change.
    ///
    /// Text-only differences that match no change kind (reordered tokens,
    /// trailing spaces on the last line) are still written but count here,
    /// in step with the Markdown report.
    pub unchanged: usize,
    /// One message per failed document.
    pub errors: Vec<String>,
}

impl BatchOutcome {
    pub fn checked(&self) -> usize {
        self.reports.len()
    }

    pub fn changed(&self) -> usize {
        self.reports.len() - self.unchanged
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Normalize every document in `paths`.
///
/// Report paths are shown relative to `root` when the document lives under it.
pub fn process_documents<S: DocumentStore + ?Sized>(
    store: &S,
    pipeline: &NormalizationPipeline,
    root: &Path,
    paths: &[PathBuf],
    mode: RunMode,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let progress = progress_bar(paths.len());

    for path in paths {
        let display = display_path(root, path);
        progress.set_message(display.clone());
        let display_ref = display.as_str();
        let span = info_span!("document", path = %display_ref);
        let _guard = span.enter();

        match process_document(store, pipeline, path, &display, mode) {
            Ok((report, written)) => {
                if !report.has_changes() {
                    outcome.unchanged += 1;
                }
                if written {
                    debug!("wrote normalized document");
                    outcome.written.push(path.clone());
                }
                outcome.reports.push(report);
            }
            Err(error) => {
                warn!(%error, "document failed");
                outcome.errors.push(format!("{display}: {error}"));
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();
    outcome
}

fn process_document<S: DocumentStore + ?Sized>(
    store: &S,
    pipeline: &NormalizationPipeline,
    path: &Path,
    display: &str,
    mode: RunMode,
) -> Result<(ChangeReport, bool)> {
    let original = store.read_document(path)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let normalized = pipeline.normalize(&original, file_name);
    let report = generate_change_report(display, document_name(path), &original, &normalized);

    let write = mode == RunMode::Apply && original != normalized;
    if write {
        store.write_document(path, &normalized)?;
    }
    Ok((report, write))
}

/// Write the collection report into `report_dir` and return its path.
pub fn write_vault_report<S: DocumentStore + ?Sized>(
    store: &S,
    report_dir: &Path,
    collection: &str,
    reports: &[ChangeReport],
    timestamp: DateTime<Utc>,
) -> Result<PathBuf> {
    store.ensure_report_dir(report_dir)?;
    let path = report_dir.join(report_file_name(collection, timestamp));
    store.write_report(&path, &format_vault_report_as_markdown(reports))?;
    Ok(path)
}

/// `path` relative to `root` with `/` separators, or `path` itself when it is
/// outside `root`.
pub fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// File name without its extension.
pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn progress_bar(len: usize) -> ProgressBar {
    if len < 2 || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {wide_msg}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_path_is_root_relative() {
        assert_eq!(
            display_path(Path::new("vault"), Path::new("vault/notes/a.md")),
            "notes/a.md"
        );
        assert_eq!(
            display_path(Path::new("."), Path::new("./b.md")),
            "b.md"
        );
        assert_eq!(
            display_path(Path::new("vault"), Path::new("elsewhere/c.md")),
            "elsewhere/c.md"
        );
    }

    #[test]
    fn document_name_drops_extension() {
        assert_eq!(document_name(Path::new("notes/My Note.md")), "My Note");
    }

    #[test]
    fn run_mode_from_flag() {
        assert_eq!(RunMode::from_dry_run(true), RunMode::DryRun);
        assert_eq!(RunMode::from_dry_run(false).label(), "apply");
    }
}
