//! File-system store and end-to-end vault runs in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use notelint_cli::batch::{RunMode, process_documents, write_vault_report};
use notelint_cli::config::{load_resolved, save_settings, vault_settings_path};
use notelint_cli::store::{DocumentStore, FsDocumentStore, StoreError};
use notelint_core::NormalizationPipeline;
use notelint_model::{LintSettings, TagFormat};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn sample_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Inbox.md", "Capture #Idea\r\n\r\n\r\n\r\nMore");
    write(root, "projects/Plan.MD", "See [[archive/Old Plan.md|old]]");
    write(root, "projects/notes.txt", "#NotMarkdown");
    write(root, ".obsidian/workspace.md", "#Hidden");
    write(root, "lint-reports/previous.md", "# Vault Lint Report");
    dir
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn discovery_skips_hidden_and_report_dirs() {
    let vault = sample_vault();
    let root = vault.path();
    let store = FsDocumentStore::new().excluding(root.join("lint-reports"));

    let files = store.list_documents(root).unwrap();

    assert_eq!(
        files,
        vec![root.join("Inbox.md"), root.join("projects/Plan.MD")]
    );
}

#[test]
fn discovery_of_a_subdirectory() {
    let vault = sample_vault();
    let files = FsDocumentStore::new()
        .list_documents(&vault.path().join("projects"))
        .unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn missing_directory_is_reported() {
    let vault = TempDir::new().unwrap();
    let result = FsDocumentStore::new().list_documents(&vault.path().join("nope"));
    assert!(matches!(result, Err(StoreError::DirectoryNotFound { .. })));
}

// ============================================================================
// Vault runs
// ============================================================================

#[test]
fn apply_rewrites_notes_and_second_run_is_clean() {
    let vault = sample_vault();
    let root = vault.path();
    let store = FsDocumentStore::new().excluding(root.join("lint-reports"));
    let pipeline = NormalizationPipeline::default();

    let files = store.list_documents(root).unwrap();
    let first = process_documents(&store, &pipeline, root, &files, RunMode::Apply);
    assert_eq!(first.written.len(), 2);
    assert!(!first.has_errors());

    let inbox = fs::read_to_string(root.join("Inbox.md")).unwrap();
    assert!(inbox.starts_with("---\nid: inbox\ntitle: Inbox\n"));
    assert!(inbox.ends_with("Capture #idea\n\nMore\n"));
    let plan = fs::read_to_string(root.join("projects/Plan.MD")).unwrap();
    assert!(plan.ends_with("See [[Old Plan|old]]\n"));

    let second = process_documents(&store, &pipeline, root, &files, RunMode::Apply);
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged, 2);

    let untouched = fs::read_to_string(root.join(".obsidian/workspace.md")).unwrap();
    assert_eq!(untouched, "#Hidden");
}

#[test]
fn dry_run_writes_only_the_vault_report() {
    let vault = sample_vault();
    let root = vault.path();
    let report_dir = root.join("lint-reports");
    let store = FsDocumentStore::new().excluding(&report_dir);

    let files = store.list_documents(root).unwrap();
    let outcome = process_documents(
        &store,
        &NormalizationPipeline::default(),
        root,
        &files,
        RunMode::DryRun,
    );
    let report = write_vault_report(
        &store,
        &report_dir,
        "vault",
        &outcome.reports,
        chrono::Utc::now(),
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(root.join("Inbox.md")).unwrap(),
        "Capture #Idea\r\n\r\n\r\n\r\nMore"
    );
    let rendered = fs::read_to_string(&report).unwrap();
    assert!(rendered.contains("- Files checked: 2"));
    assert!(rendered.contains("Path: `projects/Plan.MD`"));
    assert!(
        report
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("vault-lint-report-") && name.ends_with(".md"))
    );
}

#[test]
fn report_path_taken_by_a_file_stops_the_dry_run() {
    let vault = TempDir::new().unwrap();
    let taken = write(vault.path(), "lint-reports", "oops");
    let result = write_vault_report(
        &FsDocumentStore::new(),
        &taken,
        "vault",
        &[],
        chrono::Utc::now(),
    );
    assert!(matches!(
        result,
        Err(StoreError::ReportPathNotDirectory { .. })
    ));
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn vault_settings_drive_the_pipeline() {
    let vault = TempDir::new().unwrap();
    let root = vault.path();
    let mut settings = LintSettings::disabled();
    settings.tags.enforce = true;
    settings.tags.format = TagFormat::Uppercase;
    save_settings(&vault_settings_path(root), &settings).unwrap();
    let note = write(root, "a.md", "#todo");

    let (loaded, source) = load_resolved(None, root).unwrap();
    assert_eq!(source, Some(vault_settings_path(root)));

    let store = FsDocumentStore::new();
    let outcome = process_documents(
        &store,
        &NormalizationPipeline::new(loaded),
        root,
        &[note.clone()],
        RunMode::Apply,
    );
    assert_eq!(outcome.written, vec![note.clone()]);
    assert_eq!(fs::read_to_string(note).unwrap(), "#TODO");
}
