use std::path::PathBuf;

use notelint_cli::batch::{BatchOutcome, RunMode};

/// Result of a `file`, `dir` or `vault` command.
#[derive(Debug)]
pub struct RunResult {
    pub target: PathBuf,
    pub mode: RunMode,
    pub outcome: BatchOutcome,
    /// Collection report written by a vault dry run.
    pub report_path: Option<PathBuf>,
    /// False when stdout carries machine-readable output.
    pub show_summary: bool,
}
