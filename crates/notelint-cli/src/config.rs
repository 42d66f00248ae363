//! Settings files.
//!
//! Settings are looked up in this order:
//! 1. an explicit `--config <PATH>`
//! 2. `<vault>/.notelint.toml`
//! 3. `settings.toml` in the platform config directory
//!    - macOS: ~/Library/Application Support/dev.notelint.notelint/
//!    - Windows: %APPDATA%/notelint/notelint/config/
//!    - Linux: ~/.config/notelint/
//!
//! When none of them exists the defaults apply. Missing sections and fields in
//! a file fall back to their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use notelint_model::LintSettings;
use thiserror::Error;

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "notelint";
const APP_NAME: &str = "notelint";
const USER_CONFIG_FILENAME: &str = "settings.toml";

/// Name of the vault-local settings file.
pub const VAULT_CONFIG_FILENAME: &str = ".notelint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not determine the platform config directory")]
    NoConfigDir,
}

/// Per-user settings file, if the platform has a config directory.
pub fn user_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILENAME))
}

/// Vault-local settings file.
pub fn vault_settings_path(vault: &Path) -> PathBuf {
    vault.join(VAULT_CONFIG_FILENAME)
}

/// Pick the settings file to load. `None` means defaults.
pub fn resolve_config_path(explicit: Option<&Path>, vault: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = vault_settings_path(vault);
    if local.is_file() {
        return Some(local);
    }
    user_settings_path().filter(|path| path.is_file())
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<LintSettings, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_settings(path, &content),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(LintSettings::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Resolve and load settings, returning the file they came from.
pub fn load_resolved(
    explicit: Option<&Path>,
    vault: &Path,
) -> Result<(LintSettings, Option<PathBuf>), ConfigError> {
    match resolve_config_path(explicit, vault) {
        Some(path) => {
            let settings = load_settings(&path)?;
            tracing::info!(path = %path.display(), "loaded settings");
            Ok((settings, Some(path)))
        }
        None => {
            tracing::debug!("no settings file found, using defaults");
            Ok((LintSettings::default(), None))
        }
    }
}

/// Write settings to `path`, creating the parent directory if needed.
pub fn save_settings(path: &Path, settings: &LintSettings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write settings to the per-user settings file.
pub fn save_user_settings(settings: &LintSettings) -> Result<PathBuf, ConfigError> {
    let path = user_settings_path().ok_or(ConfigError::NoConfigDir)?;
    save_settings(&path, settings)?;
    Ok(path)
}

fn parse_settings(path: &Path, content: &str) -> Result<LintSettings, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
