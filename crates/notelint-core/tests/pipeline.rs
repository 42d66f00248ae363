//! Tests for the normalization pipeline.

use chrono::{Local, NaiveDate};
use notelint_core::{NormalizationPipeline, has_frontmatter, normalize};
use notelint_model::{
    FormattingSettings, FrontmatterSettings, LintSettings, TagFormat, TagSettings,
    WikilinkSettings, WikilinkStyle,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

fn only_tags(format: TagFormat) -> LintSettings {
    LintSettings {
        tags: TagSettings {
            enforce: true,
            format,
        },
        ..LintSettings::disabled()
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn lowercases_tags() {
    let pipeline = NormalizationPipeline::new(only_tags(TagFormat::Lowercase));
    assert_eq!(
        pipeline.normalize("hello #MyTag world", "a.md"),
        "hello #mytag world"
    );
}

#[test]
fn collapses_blank_lines_and_adds_trailing_newline() {
    let settings = LintSettings {
        formatting: FormattingSettings {
            normalize: true,
            end_with_newline: true,
            remove_multiple_blank_lines: true,
        },
        ..LintSettings::disabled()
    };
    assert_eq!(
        normalize(&settings, "line1\n\n\n\nline2", "a.md"),
        "line1\n\nline2\n"
    );
}

#[test]
fn inserts_frontmatter_for_my_note() {
    let settings = LintSettings {
        frontmatter: FrontmatterSettings {
            enforce: true,
            template: "---\ntitle: {{title}}\ndate: {{date}}\n---".to_string(),
        },
        ..LintSettings::disabled()
    };
    let pipeline = NormalizationPipeline::new(settings);

    let out = pipeline.normalize_on("Body of the note.", "My Note.md", date());
    assert_eq!(
        out,
        "---\ntitle: My Note\ndate: 2025-01-31\n---\n\nBody of the note."
    );

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let out = pipeline.normalize("Body", "My Note.md");
    assert!(out.starts_with(&format!("---\ntitle: My Note\ndate: {today}\n---\n\n")));
    assert!(out.ends_with("Body"));
}

#[test]
fn shortens_wikilinks() {
    let settings = LintSettings {
        wikilinks: WikilinkSettings {
            safe_insertion: true,
            style: WikilinkStyle::Shortest,
        },
        ..LintSettings::disabled()
    };
    assert_eq!(
        normalize(&settings, "[[Folder/Sub/Page.md|Alias]]", "a.md"),
        "[[Page|Alias]]"
    );
}

// ============================================================================
// Ordering and settings
// ============================================================================

#[test]
fn steps_run_in_fixed_order() {
    let pipeline = NormalizationPipeline::default();
    assert_eq!(
        pipeline.step_names(),
        vec!["frontmatter", "formatting", "tags", "wikilinks"]
    );
}

#[test]
fn inserted_header_separator_is_subject_to_formatting() {
    let settings = LintSettings {
        frontmatter: FrontmatterSettings {
            enforce: true,
            template: "title: {{title}}".to_string(),
        },
        ..LintSettings::default()
    };
    let pipeline = NormalizationPipeline::new(settings);
    let out = pipeline.normalize_on("\n\n\nBody #Tag [[x/Y.md]]\r\n", "N.md", date());
    assert_eq!(out, "---\ntitle: N\n---\n\nBody #tag [[Y]]\n");
}

#[test]
fn update_settings_replaces_every_rule() {
    let mut pipeline = NormalizationPipeline::new(only_tags(TagFormat::Lowercase));
    assert_eq!(pipeline.normalize("#Tag", "a.md"), "#tag");

    pipeline.update_settings(only_tags(TagFormat::Uppercase));
    assert_eq!(pipeline.settings().tags.format, TagFormat::Uppercase);
    assert_eq!(pipeline.normalize("#Tag", "a.md"), "#TAG");

    pipeline.update_settings(LintSettings::disabled());
    assert_eq!(pipeline.normalize("#Tag\r\n\n\n\n", "a.md"), "#Tag\r\n\n\n\n");
}

#[test]
fn conforming_document_is_unchanged() {
    let pipeline = NormalizationPipeline::default();
    let content = "---\nid: note\ntitle: note\ndate: 2024-01-01\n---\n\n# Heading\n\nText #done and [[Other|see]].\n";
    assert!(has_frontmatter(content));
    assert_eq!(pipeline.normalize(content, "note.md"), content);
}

#[test]
fn defaults_normalize_a_messy_note() {
    let pipeline = NormalizationPipeline::default();
    let out = pipeline.normalize_on(
        "# Ideas\r\n\r\n\r\n\r\nSee [[projects/Alpha.md]] #Work/Plans  \r\n",
        "Ideas.md",
        date(),
    );
    assert_eq!(
        out,
        "---\nid: ideas\ntitle: Ideas\ndate: 2025-01-31\n---\n\n# Ideas\n\nSee [[Alpha]] #work/plans\n"
    );
    assert_eq!(pipeline.normalize_on(&out, "Ideas.md", date()), out);
}
