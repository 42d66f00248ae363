//! Property tests for idempotence and no-op guarantees.

use chrono::NaiveDate;
use notelint_core::{NormalizationPipeline, enforce_frontmatter, has_frontmatter, normalize_tag};
use notelint_model::{
    FormattingSettings, FrontmatterSettings, LintSettings, ReportSettings, TagFormat,
    TagSettings, WikilinkSettings, WikilinkStyle,
};
use proptest::prelude::*;

const CONTENT: &str = r"[-aBmdX#|/._ `\[\]\n\r]{0,120}";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn tag_format() -> impl Strategy<Value = TagFormat> {
    prop::sample::select(TagFormat::all().to_vec())
}

fn wikilink_style() -> impl Strategy<Value = WikilinkStyle> {
    prop::sample::select(WikilinkStyle::all().to_vec())
}

fn template() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "---\nid: {{id}}\ntitle: {{title}}\ndate: {{date}}\n---".to_string(),
        "title: {{title}}\ntags: #Inbox".to_string(),
        "---\nlink: [[{{title}}]]\n---\n".to_string(),
        String::new(),
    ])
}

prop_compose! {
    fn settings()(
        enforce_frontmatter in any::<bool>(),
        template in template(),
        normalize in any::<bool>(),
        end_with_newline in any::<bool>(),
        remove_multiple_blank_lines in any::<bool>(),
        enforce_tags in any::<bool>(),
        format in tag_format(),
        safe_insertion in any::<bool>(),
        style in wikilink_style(),
    ) -> LintSettings {
        LintSettings {
            frontmatter: FrontmatterSettings { enforce: enforce_frontmatter, template },
            formatting: FormattingSettings { normalize, end_with_newline, remove_multiple_blank_lines },
            tags: TagSettings { enforce: enforce_tags, format },
            wikilinks: WikilinkSettings { safe_insertion, style },
            report: ReportSettings::default(),
        }
    }
}

proptest! {
    #[test]
    fn pipeline_is_idempotent(
        settings in settings(),
        content in CONTENT,
        file_name in r"[A-Za-z #/._-]{0,12}",
    ) {
        let pipeline = NormalizationPipeline::new(settings);
        let once = pipeline.normalize_on(&content, &file_name, date());
        let twice = pipeline.normalize_on(&once, &file_name, date());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn disabled_pipeline_is_identity(content in CONTENT) {
        let pipeline = NormalizationPipeline::new(LintSettings::disabled());
        prop_assert_eq!(pipeline.normalize_on(&content, "a.md", date()), content);
    }

    #[test]
    fn frontmatter_is_added_in_front_of_the_body(content in CONTENT, template in template()) {
        prop_assume!(!has_frontmatter(&content));
        let settings = FrontmatterSettings { enforce: true, template };
        let out = enforce_frontmatter(&settings, &content, "Note.md");
        prop_assert!(has_frontmatter(&out));
        prop_assert!(out.ends_with(&content));
    }

    #[test]
    fn tag_formats_are_fixed_points(tag in r"[A-Za-z0-9_/-]{0,24}", format in tag_format()) {
        let settings = TagSettings { enforce: true, format };
        let once = normalize_tag(&settings, &tag);
        prop_assert_eq!(normalize_tag(&settings, &once), once);
    }
}
