//! Change reports for normalized notes.
//!
//! - [`generate_change_report`] classifies the differences between the
//!   original and normalized text of one document
//! - [`format_report_as_markdown`] and [`format_vault_report_as_markdown`]
//!   render one or many reports for people to read

mod change;
mod markdown;

pub use change::generate_change_report;
pub use markdown::{
    UNCHANGED_LIST_LIMIT, format_report_as_markdown, format_vault_report_as_markdown,
    report_file_name, tally_change_kinds,
};
