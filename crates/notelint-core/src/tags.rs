//! Inline tag detection and case rewriting.
//!
//! Rewriting is a single scan over the whole content. It does not skip code
//! spans: a `#token` inside a fenced block is rewritten like any other.

use notelint_model::{TagFormat, TagSettings};
use regex::Captures;

use crate::patterns::TAG;

const SEPARATORS: [char; 3] = ['_', '-', '/'];

/// Tag tokens (without `#`) in document order, duplicates retained.
pub fn extract_tags(content: &str) -> Vec<String> {
    TAG.captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Apply the configured case style to one tag token.
pub fn normalize_tag(settings: &TagSettings, tag: &str) -> String {
    if !settings.enforce {
        return tag.to_string();
    }
    apply_format(settings.format, tag)
}

/// Apply a case style to one tag token regardless of the enforce flag.
pub fn apply_format(format: TagFormat, tag: &str) -> String {
    match format {
        TagFormat::Lowercase => tag.to_lowercase(),
        TagFormat::Uppercase => tag.to_uppercase(),
        TagFormat::CamelCase => camel_case(tag),
        TagFormat::None => tag.to_string(),
    }
}

/// Rewrite every tag in `content`.
pub fn enforce(settings: &TagSettings, content: &str) -> String {
    if !settings.enforce {
        return content.to_string();
    }
    TAG.replace_all(content, |caps: &Captures<'_>| {
        format!("#{}", apply_format(settings.format, &caps[1]))
    })
    .into_owned()
}

/// `my-tag/sub_item` becomes `myTagSubItem`.
///
/// Empty segments are dropped. A tag without separators is taken to be camel
/// case already and only its first character is lowercased, so `myTag` stays
/// `myTag` on a second pass. An all-caps tag such as `MYTAG` is lowercased
/// whole.
fn camel_case(tag: &str) -> String {
    if !tag.contains(SEPARATORS) {
        if is_all_caps(tag) {
            return tag.to_lowercase();
        }
        return lowercase_first(tag);
    }
    let segments: Vec<&str> = tag
        .split(SEPARATORS)
        .filter(|segment| !segment.is_empty())
        .collect();
    let Some((first, rest)) = segments.split_first() else {
        return tag.to_string();
    };
    let mut result = first.to_lowercase();
    for segment in rest {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result
}

fn is_all_caps(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && !value.chars().any(char::is_lowercase)
}

fn lowercase_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(head) => head.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(format: TagFormat) -> TagSettings {
        TagSettings {
            enforce: true,
            format,
        }
    }

    #[test]
    fn extracts_tokens_without_hash() {
        assert_eq!(
            extract_tags("#One two #two/three #One"),
            vec!["One", "two/three", "One"]
        );
        assert!(extract_tags("no tags # here").is_empty());
    }

    #[test]
    fn lowercase_rewrites_in_place() {
        assert_eq!(
            enforce(&settings(TagFormat::Lowercase), "hello #MyTag world"),
            "hello #mytag world"
        );
    }

    #[test]
    fn uppercase_rewrites_in_place() {
        assert_eq!(
            enforce(&settings(TagFormat::Uppercase), "#project/Alpha done"),
            "#PROJECT/ALPHA done"
        );
    }

    #[test]
    fn camel_case_joins_segments() {
        let s = settings(TagFormat::CamelCase);
        assert_eq!(normalize_tag(&s, "my-tag"), "myTag");
        assert_eq!(normalize_tag(&s, "MY_BIG-tag/SUB"), "myBigTagSub");
        assert_eq!(normalize_tag(&s, "-leading"), "leading");
        assert_eq!(normalize_tag(&s, "MyTag"), "myTag");
        assert_eq!(normalize_tag(&s, "myTag"), "myTag");
        assert_eq!(normalize_tag(&s, "--"), "--");
    }

    #[test]
    fn camel_case_lowercases_all_caps_words() {
        let s = settings(TagFormat::CamelCase);
        assert_eq!(normalize_tag(&s, "MYTAG"), "mytag");
        assert_eq!(normalize_tag(&s, "TODO2"), "todo2");
        assert_eq!(enforce(&s, "#MYTAG and #MyTag"), "#mytag and #myTag");
    }

    #[test]
    fn none_and_disabled_are_identity() {
        assert_eq!(normalize_tag(&settings(TagFormat::None), "MiXed"), "MiXed");
        let disabled = TagSettings {
            enforce: false,
            format: TagFormat::Uppercase,
        };
        assert_eq!(normalize_tag(&disabled, "abc"), "abc");
        assert_eq!(enforce(&disabled, "#abc"), "#abc");
    }

    #[test]
    fn rewrites_inside_code_blocks_too() {
        let content = "```\n#Inside\n```\n#Outside";
        assert_eq!(
            enforce(&settings(TagFormat::Lowercase), content),
            "```\n#inside\n```\n#outside"
        );
    }

    #[test]
    fn every_format_is_a_fixed_point_on_samples() {
        for format in TagFormat::all() {
            let s = settings(*format);
            for tag in ["my-tag", "MyTag", "a/B_c", "x", "_", "UPPER-lower", "MYTAG", "A1"] {
                let once = normalize_tag(&s, tag);
                assert_eq!(normalize_tag(&s, &once), once, "{format:?} {tag}");
            }
        }
    }
}
