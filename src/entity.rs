use std::borrow::Cow;

pub(crate) fn serialize_text(content: Cow<str>) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in content.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            '\'' => {
                entity_seen = true;
                result.push_str("&#039;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        content
    } else {
        result.into()
    }
}

// attribute values are stored as written; only the delimiter needs escaping
pub(crate) fn serialize_attribute(content: Cow<str>) -> Cow<str> {
    if content.contains('"') {
        content.replace('"', "&quot;").into()
    } else {
        content
    }
}

pub(crate) fn needs_quotes(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '=' | '`'))
}

/// Make comment text safe to place between `<!--` and `-->`.
///
/// `-->` becomes `-- ` and `<!--` becomes ` --`, in that order.
pub(crate) fn serialize_comment(content: Cow<str>) -> Cow<str> {
    if !content.contains("-->") && !content.contains("<!--") {
        return content;
    }
    content.replace("-->", "-- ").replace("<!--", " --").into()
}
