//! Document access for the batch runner.
//!
//! [`DocumentStore`] is the seam between the normalization commands and the
//! place notes live. [`FsDocumentStore`] walks a vault on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while listing, reading or writing documents and reports.
#[derive(Debug, Error)]
pub enum StoreError {
    // === Discovery ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Documents ===
    #[error("failed to read document {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write document {path}: {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // === Reports ===
    /// Something other than a directory already occupies the report path.
    #[error("report path exists and is not a directory: {path}")]
    ReportPathNotDirectory { path: PathBuf },

    #[error("failed to create report directory {path}: {source}")]
    ReportDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Access to a collection of Markdown documents.
pub trait DocumentStore {
    /// Markdown documents under `dir`, recursively, sorted by path.
    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    fn read_document(&self, path: &Path) -> Result<String>;

    fn write_document(&self, path: &Path, content: &str) -> Result<()>;

    /// Create the report directory if it is missing.
    ///
    /// Fails with [`StoreError::ReportPathNotDirectory`] when the path is
    /// taken by a file.
    fn ensure_report_dir(&self, dir: &Path) -> Result<()>;

    fn write_report(&self, path: &Path, content: &str) -> Result<()>;
}

/// File-system store. Hidden directories and excluded directories are not
/// descended into.
#[derive(Debug, Clone, Default)]
pub struct FsDocumentStore {
    excluded: Vec<PathBuf>,
}

impl FsDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip `dir` and everything below it during discovery.
    #[must_use]
    pub fn excluding(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        self.excluded.iter().any(|excluded| same_path(excluded, dir))
    }

    fn collect(&self, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        let entries = fs::read_dir(dir).map_err(|source| StoreError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|source| StoreError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            if path.is_dir() {
                if is_hidden(&path) || self.is_excluded(&path) {
                    continue;
                }
                self.collect(&path, files)?;
            } else if is_markdown(&path) {
                files.push(path);
            }
        }
        Ok(())
    }
}

impl DocumentStore for FsDocumentStore {
    fn list_documents(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(StoreError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        let mut files = Vec::new();
        self.collect(dir, &mut files)?;
        files.sort();
        Ok(files)
    }

    fn read_document(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| StoreError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| StoreError::DocumentWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn ensure_report_dir(&self, dir: &Path) -> Result<()> {
        if dir.exists() && !dir.is_dir() {
            return Err(StoreError::ReportPathNotDirectory {
                path: dir.to_path_buf(),
            });
        }
        fs::create_dir_all(dir).map_err(|source| StoreError::ReportDirCreate {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn write_report(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| StoreError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// `.md` extension, case-insensitive.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
