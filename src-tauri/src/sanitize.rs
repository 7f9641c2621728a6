//! Text Sanitization
//!
//! Plain-text cleanup applied to everything the widget persists: markup is
//! stripped, stray `<` are entity-encoded, percent-encoded octets are
//! removed. Task text additionally has all whitespace runs collapsed; notes
//! keep their line breaks.

use regex::Regex;
use std::sync::LazyLock;
use task_reconciler::escape_html;

static SCRIPT_OR_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("valid script/style pattern")
});
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid breaks pattern"));
static OCTET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)%[a-f0-9]{2}").expect("valid octet pattern"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("valid spaces pattern"));

/// Single-line plain text (task text)
pub fn sanitize_text_field(raw: &str) -> String {
    sanitize(raw, false)
}

/// Multi-line plain text (notes)
pub fn sanitize_textarea_field(raw: &str) -> String {
    sanitize(raw, true)
}

fn sanitize(raw: &str, keep_newlines: bool) -> String {
    let mut filtered = raw.to_string();

    if filtered.contains('<') {
        filtered = encode_stray_less_than(&filtered);
        filtered = strip_all_tags(&filtered);
    }

    if !keep_newlines {
        filtered = BREAKS.replace_all(&filtered, " ").into_owned();
    }
    filtered = php_trim(&filtered).to_string();

    let mut found = false;
    // Removing one octet can expose another ("%%4141" -> "%41").
    while OCTET.is_match(&filtered) {
        filtered = OCTET.replace_all(&filtered, "").into_owned();
        found = true;
    }
    if found {
        filtered = php_trim(&SPACES.replace_all(&filtered, " ")).to_string();
    }

    filtered
}

/// Entity-encode `<` that cannot open a tag: those followed by another `<`
/// or the end of input before any `>`.
fn encode_stray_less_than(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let end = candidate[1..].find(['<', '>']).map(|i| i + 1);

        match end {
            Some(i) if candidate.as_bytes()[i] == b'>' => {
                out.push_str(&candidate[..=i]);
                rest = &candidate[i + 1..];
            }
            Some(i) => {
                out.push_str(&escape_html(&candidate[..i]));
                rest = &candidate[i..];
            }
            None => {
                out.push_str(&escape_html(candidate));
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn strip_all_tags(text: &str) -> String {
    let without_scripts = SCRIPT_OR_STYLE.replace_all(text, "");
    let stripped = TAG.replace_all(&without_scripts, "");
    php_trim(&stripped).to_string()
}

fn php_trim(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(sanitize_text_field("<b>bold</b> move"), "bold move");
        assert_eq!(sanitize_text_field("<a href=\"x\">link</a>"), "link");
    }

    #[test]
    fn test_removes_script_contents() {
        assert_eq!(sanitize_text_field("<script>alert(1)</script>hi"), "hi");
        assert_eq!(sanitize_textarea_field("a<STYLE type=x>p{}</style>b"), "ab");
    }

    #[test]
    fn test_encodes_stray_less_than() {
        assert_eq!(sanitize_text_field("a < b"), "a &lt; b");
        assert_eq!(sanitize_text_field("1 <2 <b>3</b>"), "1 &lt;2 3");
    }

    #[test]
    fn test_existing_entities_survive_encoding() {
        assert_eq!(sanitize_text_field("a < b &amp; c"), "a &lt; b &amp; c");
        assert_eq!(sanitize_text_field("a &lt; b"), "a &lt; b");
    }

    #[test]
    fn test_text_field_collapses_whitespace() {
        assert_eq!(sanitize_text_field("  buy\t\tmilk \n and eggs  "), "buy milk and eggs");
    }

    #[test]
    fn test_textarea_keeps_line_breaks() {
        assert_eq!(
            sanitize_textarea_field("  first line\n\n\tsecond  line\n"),
            "first line\n\n\tsecond  line"
        );
    }

    #[test]
    fn test_removes_percent_octets() {
        assert_eq!(sanitize_text_field("100%25 sure"), "100 sure");
        assert_eq!(sanitize_text_field("%41 %%4141x"), "x");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_text_field("Call the plumber"), "Call the plumber");
        assert_eq!(sanitize_textarea_field("Fish & chips"), "Fish & chips");
    }
}
