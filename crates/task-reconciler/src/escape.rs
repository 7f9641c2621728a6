//! HTML entity handling for user-supplied text.
//!
//! Stored text may already carry entities (the back end encodes stray `<`),
//! so escaping leaves existing entities alone instead of encoding them again.

/// Entities decoded when stored text is loaded into the editor
const ENTITIES: [(&str, char); 7] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#039;", '\''),
    ("&#39;", '\''),
    ("&#x27;", '\''),
];

/// Escape the five markup-significant characters. An `&` that already
/// starts an entity is kept as is.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        match ch {
            '&' if entity_len(&text[i..]).is_some() => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Replace the common entities with the characters they stand for.
/// Unknown entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        for (entity, ch) in ENTITIES {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = tail;
                continue 'scan;
            }
        }
        out.push('&');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

/// Length of the entity `text` starts with: `&name;`, `&#123;` or `&#x1f;`.
fn entity_len(text: &str) -> Option<usize> {
    let body = text.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];

    let valid = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = name.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric())
    };
    valid.then_some(end + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x('y')">&</b>"#),
            "&lt;b onclick=&quot;x(&#039;y&#039;)&quot;&gt;&amp;&lt;/b&gt;"
        );
    }

    #[test]
    fn existing_entities_are_not_encoded_twice() {
        assert_eq!(escape_html("a &lt; b"), "a &lt; b");
        assert_eq!(escape_html("&#039; &#x27; &nbsp;"), "&#039; &#x27; &nbsp;");
        assert_eq!(escape_html("AT&T & co; &#;"), "AT&amp;T &amp; co; &amp;#;");
    }

    #[test]
    fn decode_restores_typed_text() {
        assert_eq!(decode_entities("a &lt; b &amp; c"), "a < b & c");
        assert_eq!(decode_entities("a &nbsp; b & c"), "a &nbsp; b & c");
    }
}
