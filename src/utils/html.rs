//! Escaping for the three contexts head markup is written into.
//!
//! Text inside `<title>` only needs `&`, `<` and `>` replaced. Attribute values
//! are always double-quoted, so quotes are escaped as well. JSON-LD goes into a
//! raw-text `<script>` element where entities are not decoded at all.

use std::borrow::Cow;

fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

fn attr_entity(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => text_entity(c),
    }
}

fn replace_chars(s: &str, entity: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = s.find(|c| entity(c).is_some()) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    for c in s[first..].chars() {
        match entity(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape element text content.
pub fn escape(s: &str) -> Cow<'_, str> {
    replace_chars(s, text_entity)
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    replace_chars(s, attr_entity)
}

/// Make serialized JSON safe inside `<script>`.
///
/// `</` could end the element early and `<!--` switches legacy parsers into
/// the escaped script state. Both only occur inside JSON strings, where they
/// can be written as `<\/` and `<\u0021--`.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    if !json.contains("</") && !json.contains("<!--") {
        return Cow::Borrowed(json);
    }
    Cow::Owned(json.replace("</", "<\\/").replace("<!--", "<\\u0021--"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape("hello world"), Cow::Borrowed("hello world")));
        assert!(matches!(escape_attr("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape("<b>"), "&lt;b&gt;");
        assert_eq!(escape("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape("say \"hi\", it's"), "say \"hi\", it's");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
        assert_eq!(escape_attr("it's <ok>"), "it&#39;s &lt;ok&gt;");
    }

    #[test]
    fn test_escape_keeps_prefix() {
        assert_eq!(escape_attr("Привет & пока"), "Привет &amp; пока");
    }

    #[test]
    fn test_escape_script_json() {
        assert_eq!(escape_script_json(r#"{"a":"b"}"#), r#"{"a":"b"}"#);
        assert_eq!(
            escape_script_json(r#"{"a":"</script><b>"}"#),
            r#"{"a":"<\/script><b>"}"#
        );
    }

    #[test]
    fn test_escape_script_json_comment_open() {
        assert_eq!(
            escape_script_json(r#"{"a":"<!-- x"}"#),
            r#"{"a":"<\u0021-- x"}"#
        );
        assert!(matches!(escape_script_json(r#"{"a":"<!-"}"#), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escaped_script_json_still_parses() {
        let escaped = escape_script_json(r#"{"a":"</script>","b":"<!--</x>"}"#);
        let value: serde_json::Value = serde_json::from_str(&escaped).unwrap();
        assert_eq!(value["a"], "</script>");
        assert_eq!(value["b"], "<!--</x>");
    }
}
