//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "notelint",
    version,
    about = "Normalize Markdown notes in a vault",
    long_about = "Normalize Markdown notes in a vault.\n\n\
                  Adds missing frontmatter, cleans up line endings and blank lines,\n\
                  rewrites inline tags to one case style and shortens wikilinks.\n\
                  Use --dry-run to report what would change without writing."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Vault root directory.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub vault: PathBuf,

    /// Settings file (default: <VAULT>/.notelint.toml, then the user settings).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a single note.
    File(FileArgs),

    /// Normalize every note under a directory.
    Dir(DirArgs),

    /// Normalize every note in the vault.
    Vault(VaultArgs),

    /// Show the code, heading, tag and wikilink ranges found in a note.
    Inspect(InspectArgs),

    /// Show or create settings files.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct FileArgs {
    /// Note to normalize.
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Print a change report instead of writing the note.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Report format for --dry-run.
    #[arg(long = "output", value_enum, default_value = "markdown")]
    pub output: ReportFormatArg,
}

#[derive(Args)]
pub struct DirArgs {
    /// Directory whose notes are normalized, recursively.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Print a change report instead of writing the notes.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Report format for --dry-run.
    #[arg(long = "output", value_enum, default_value = "markdown")]
    pub output: ReportFormatArg,
}

#[derive(Args)]
pub struct VaultArgs {
    /// Write a report into the report directory instead of writing the notes.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved settings as TOML.
    Show,

    /// Write the resolved settings to <VAULT>/.notelint.toml.
    Init(ConfigInitArgs),
}

#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing settings file.
    #[arg(long)]
    pub force: bool,

    /// Write the per-user settings file instead of the vault file.
    #[arg(long)]
    pub user: bool,
}

/// Dry-run report formats.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Markdown,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
