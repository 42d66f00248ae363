//! Compiled detection patterns shared by the scanner and the rules.
//!
//! Matching is regex-based rather than a Markdown parse: the contract is the
//! match boundaries, not Markdown semantics.

use std::sync::LazyLock;

use regex::Regex;

/// Line-initial triple backtick through the next triple backtick.
pub static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^```.*?```").expect("Invalid code block regex"));

/// Backtick, one or more non-backtick characters, backtick.
pub static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("Invalid inline code regex"));

/// One to six `#`, at least one space, then the rest of the line.
pub static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6} +.*$").expect("Invalid heading regex"));

/// `[[inner]]`; group 1 is the target plus optional alias.
pub static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("Invalid wikilink regex"));

/// `#token`; group 1 is the token without the `#`.
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z0-9_/-]+)").expect("Invalid tag regex"));

/// Carriage returns directly before a line feed.
pub static CRLF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r+\n").expect("Invalid line ending regex"));

/// Three or more consecutive newlines.
pub static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid blank line regex"));

/// Runs of characters that cannot appear in a generated id.
pub static NON_ID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid id regex"));
