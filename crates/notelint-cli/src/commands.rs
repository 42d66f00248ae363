use std::path::{Path, PathBuf};
use std::slice;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use tracing::{info, info_span, warn};

use notelint_cli::batch::{BatchOutcome, RunMode, process_documents, write_vault_report};
use notelint_cli::config::{load_resolved, save_settings, save_user_settings, vault_settings_path};
use notelint_cli::store::{DocumentStore, FsDocumentStore};
use notelint_core::{NormalizationPipeline, scan_all};
use notelint_model::LintSettings;
use notelint_report::{format_report_as_markdown, format_vault_report_as_markdown};

use crate::cli::{ConfigInitArgs, DirArgs, FileArgs, InspectArgs, ReportFormatArg, VaultArgs};
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::RunResult;

/// Longest range text shown by `inspect` before it is cut.
const INSPECT_TEXT_WIDTH: usize = 60;

/// A vault root with its resolved settings.
pub struct Workspace {
    pub root: PathBuf,
    pub settings: LintSettings,
    pub config_path: Option<PathBuf>,
}

impl Workspace {
    pub fn load(root: &Path, config: Option<&Path>) -> Result<Self> {
        if !root.is_dir() {
            bail!("vault directory not found: {}", root.display());
        }
        let (settings, config_path) = load_resolved(config, root).context("load settings")?;
        Ok(Self {
            root: root.to_path_buf(),
            settings,
            config_path,
        })
    }

    fn pipeline(&self) -> NormalizationPipeline {
        if !self.settings.any_rule_enabled() {
            warn!("every normalization rule is disabled; documents will not change");
        }
        NormalizationPipeline::new(self.settings.clone())
    }

    fn report_dir(&self) -> PathBuf {
        self.root.join(&self.settings.report.output_dir)
    }

    fn store(&self) -> FsDocumentStore {
        FsDocumentStore::new().excluding(self.report_dir())
    }

    /// Vault directory name, used in report file names.
    fn collection_name(&self) -> String {
        self.root
            .canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "vault".to_string())
    }
}

pub fn run_file(workspace: &Workspace, args: &FileArgs) -> Result<RunResult> {
    let span = info_span!("file", path = %args.path.display());
    let _guard = span.enter();
    if !args.path.is_file() {
        bail!("note not found: {}", args.path.display());
    }
    let mode = RunMode::from_dry_run(args.dry_run);
    let start = Instant::now();
    let outcome = process_documents(
        &workspace.store(),
        &workspace.pipeline(),
        &workspace.root,
        slice::from_ref(&args.path),
        mode,
    );
    log_outcome(&outcome, mode, start);

    if args.dry_run {
        if let Some(report) = outcome.reports.first() {
            match args.output {
                ReportFormatArg::Json => print_json(report)?,
                ReportFormatArg::Markdown => print!("{}", format_report_as_markdown(report)),
            }
        }
    }
    Ok(RunResult {
        target: args.path.clone(),
        mode,
        outcome,
        report_path: None,
        show_summary: !(args.dry_run && args.output == ReportFormatArg::Json),
    })
}

pub fn run_dir(workspace: &Workspace, args: &DirArgs) -> Result<RunResult> {
    let span = info_span!("dir", dir = %args.dir.display());
    let _guard = span.enter();
    let store = workspace.store();
    let paths = store
        .list_documents(&args.dir)
        .with_context(|| format!("list notes in {}", args.dir.display()))?;
    info!(document_count = paths.len(), "discovered notes");

    let mode = RunMode::from_dry_run(args.dry_run);
    let start = Instant::now();
    let outcome = process_documents(&store, &workspace.pipeline(), &workspace.root, &paths, mode);
    log_outcome(&outcome, mode, start);

    if args.dry_run {
        match args.output {
            ReportFormatArg::Json => print_json(&outcome.reports)?,
            ReportFormatArg::Markdown => {
                print!("{}", format_vault_report_as_markdown(&outcome.reports));
            }
        }
    }
    Ok(RunResult {
        target: args.dir.clone(),
        mode,
        outcome,
        report_path: None,
        show_summary: !(args.dry_run && args.output == ReportFormatArg::Json),
    })
}

pub fn run_vault(workspace: &Workspace, args: &VaultArgs) -> Result<RunResult> {
    let span = info_span!("vault", root = %workspace.root.display());
    let _guard = span.enter();
    let store = workspace.store();
    let report_dir = workspace.report_dir();
    if args.dry_run {
        store
            .ensure_report_dir(&report_dir)
            .context("prepare report directory")?;
    }
    let paths = store
        .list_documents(&workspace.root)
        .with_context(|| format!("list notes in {}", workspace.root.display()))?;
    info!(document_count = paths.len(), "discovered notes");

    let mode = RunMode::from_dry_run(args.dry_run);
    let start = Instant::now();
    let outcome = process_documents(&store, &workspace.pipeline(), &workspace.root, &paths, mode);
    log_outcome(&outcome, mode, start);

    let report_path = if args.dry_run {
        let path = write_vault_report(
            &store,
            &report_dir,
            &workspace.collection_name(),
            &outcome.reports,
            Utc::now(),
        )
        .context("write vault report")?;
        info!(path = %path.display(), "wrote vault report");
        Some(path)
    } else {
        None
    };
    Ok(RunResult {
        target: workspace.root.clone(),
        mode,
        outcome,
        report_path,
        show_summary: true,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let content = FsDocumentStore::new()
        .read_document(&args.path)
        .context("read note")?;
    let ranges = scan_all(&content);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Start"),
        header_cell("End"),
        header_cell("Protected"),
        header_cell("Text"),
    ]);
    apply_table_style(&mut table);
    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for range in &ranges {
        table.add_row(vec![
            Cell::new(range.kind.as_str()),
            Cell::new(range.start),
            Cell::new(range.end),
            if range.kind.is_protected() {
                Cell::new("yes")
            } else {
                dim_cell("-")
            },
            Cell::new(preview(&range.text)),
        ]);
    }
    println!("{}: {} ranges", args.path.display(), ranges.len());
    if !ranges.is_empty() {
        println!("{table}");
    }
    Ok(())
}

pub fn run_config_show(workspace: &Workspace) -> Result<()> {
    match &workspace.config_path {
        Some(path) => println!("# source: {}", path.display()),
        None => println!("# source: defaults"),
    }
    let rendered = toml::to_string_pretty(&workspace.settings).context("serialize settings")?;
    print!("{rendered}");
    Ok(())
}

pub fn run_config_init(workspace: &Workspace, args: &ConfigInitArgs) -> Result<PathBuf> {
    if args.user {
        return save_user_settings(&workspace.settings).context("save user settings");
    }
    let path = vault_settings_path(&workspace.root);
    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    save_settings(&path, &workspace.settings).context("save vault settings")?;
    Ok(path)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize reports")?;
    println!("{json}");
    Ok(())
}

fn log_outcome(outcome: &BatchOutcome, mode: RunMode, start: Instant) {
    info!(
        mode = mode.label(),
        checked = outcome.checked(),
        changed = outcome.changed(),
        written = outcome.written.len(),
        errors = outcome.errors.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch complete"
    );
}

/// Single-line excerpt of range text.
fn preview(text: &str) -> String {
    let flat = text.replace('\r', "\\r").replace('\n', "\\n");
    if flat.chars().count() <= INSPECT_TEXT_WIDTH {
        return flat;
    }
    let cut: String = flat.chars().take(INSPECT_TEXT_WIDTH - 3).collect();
    format!("{cut}...")
}
