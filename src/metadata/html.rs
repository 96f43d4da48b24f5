//! Meta tag extraction and entity decoding for world pages

use std::sync::LazyLock;

use regex_lite::Regex;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT_RE should compile"));
static META_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b(?:"[^"]*"|'[^']*'|[^"'>])*>"#).expect("META_TAG_RE should compile")
});
static META_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("META_ATTR_RE should compile")
});

/// Raw `content` of the first `<meta>` whose `name` attribute is `name`.
///
/// Tags inside `<!-- -->` comments are ignored. Returns `Some("")` for a
/// matching tag without `content`. The value is returned undecoded.
pub fn extract_meta_content(html: &str, name: &str) -> Option<String> {
    let html = COMMENT_RE.replace_all(html, "");

    for meta_tag in META_TAG_RE.find_iter(&html) {
        let mut matched = false;
        let mut content = None;

        for caps in META_ATTR_RE.captures_iter(meta_tag.as_str()) {
            let Some(key) = caps.get(1).map(|m| m.as_str()) else {
                continue;
            };
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str());

            match key.to_ascii_lowercase().as_str() {
                "name" if value == name => matched = true,
                "content" => content = Some(value),
                _ => {}
            }
        }

        if matched {
            return Some(content.unwrap_or_default().to_string());
        }
    }

    None
}

/// Decode named and numeric character references
pub fn decode_html_entities(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_by_name_attribute() {
        let html = r#"<head><meta name="og:title" content="Neon Club by Jane"></head>"#;
        assert_eq!(
            extract_meta_content(html, "og:title"),
            Some("Neon Club by Jane".to_string())
        );
    }

    #[test]
    fn test_content_before_name_single_quotes() {
        let html = r#"<meta content='https://img/x.png' name="og:image" />"#;
        assert_eq!(
            extract_meta_content(html, "og:image"),
            Some("https://img/x.png".to_string())
        );
    }

    #[test]
    fn test_property_attribute_is_not_a_name() {
        let html = r#"<meta property="og:title" content="From Property by A"><meta name="og:title" content="From Name by B">"#;
        assert_eq!(
            extract_meta_content(html, "og:title"),
            Some("From Name by B".to_string())
        );
        assert_eq!(
            extract_meta_content(r#"<meta property="og:image" content="x">"#, "og:image"),
            None
        );
    }

    #[test]
    fn test_commented_out_tags_are_skipped() {
        let html = r#"<!-- <meta name="og:title" content="Old by Nobody"> -->
            <meta name="og:title" content="Live by Someone">"#;
        assert_eq!(
            extract_meta_content(html, "og:title"),
            Some("Live by Someone".to_string())
        );
        assert_eq!(
            extract_meta_content(r#"<!--<meta name="og:image" content="x">-->"#, "og:image"),
            None
        );
    }

    #[test]
    fn test_first_matching_tag_wins() {
        let html = r#"<meta name="og:title" content="First"><meta name="og:title" content="Second">"#;
        assert_eq!(extract_meta_content(html, "og:title"), Some("First".to_string()));
    }

    #[test]
    fn test_missing_tag_and_missing_content() {
        let html = r#"<meta name="og:title"><meta name="description" content="x">"#;
        assert_eq!(extract_meta_content(html, "og:title"), Some(String::new()));
        assert_eq!(extract_meta_content(html, "og:image"), None);
    }

    #[test]
    fn test_content_with_angle_bracket_in_quotes() {
        let html = r#"<meta name="og:title" content="a > b by c">"#;
        assert_eq!(extract_meta_content(html, "og:title"), Some("a > b by c".to_string()));
    }

    #[test]
    fn test_value_is_not_decoded() {
        let html = r#"<meta name="og:title" content="Tom &amp; Jerry by X">"#;
        assert_eq!(
            extract_meta_content(html, "og:title"),
            Some("Tom &amp; Jerry by X".to_string())
        );
    }

    #[test]
    fn test_decodes_common_and_numeric_entities() {
        assert_eq!(decode_html_entities("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(decode_html_entities("&lt;3 &quot;hi&quot;"), "<3 \"hi\"");
        assert_eq!(decode_html_entities("it&#39;s"), "it's");
        assert_eq!(decode_html_entities("&#x27;q&#xFF20;"), "'q\u{FF20}");
    }

    #[test]
    fn test_decodes_latin1_named_entities() {
        assert_eq!(
            decode_html_entities("Caf&eacute; &Uuml;ber &frac12; &copy; &szlig;"),
            "Café Über ½ © ß"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(decode_html_entities("Neon Club"), "Neon Club");
    }
}
