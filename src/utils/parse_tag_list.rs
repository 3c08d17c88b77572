use crate::types::BusinessTag;
use crate::utils::normalize_text;

/// Parses a field that stores a list serialized as text, e.g.
/// `"['Tree Pruning', 'Landscaping']"`.
///
/// Missing, malformed, or non-list values all yield an empty list; this
/// function never fails. Each parsed element is normalized.
pub fn parse_tag_list(value: Option<&str>) -> Vec<BusinessTag> {
    let raw = match value {
        Some(raw) => raw.trim(),
        None => return Vec::new(),
    };

    match parse_list_literal(raw) {
        Some(items) => items
            .iter()
            .map(|item| normalize_text(Some(item.as_str())))
            .collect(),
        None => Vec::new(),
    }
}

/// Minimal reader for a bracketed list of quoted strings, the shape the
/// dataset stores tags in. Elements may be single- or double-quoted;
/// backslash escapes keep the following character verbatim. Returns `None`
/// for anything that is not a complete, well-formed list of strings.
fn parse_list_literal(raw: &str) -> Option<Vec<String>> {
    let inner = raw.strip_prefix('[')?.strip_suffix(']')?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while let Some(c) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else {
                break;
            }
        }

        let quote = match chars.peek() {
            // End of input here means an empty list or a trailing comma.
            None => break,
            Some(&c) if c == '\'' || c == '"' => c,
            Some(_) => return None,
        };
        chars.next();

        let mut item = String::new();
        let mut closed = false;
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(escaped) => item.push(escaped),
                    None => return None,
                }
            } else if c == quote {
                closed = true;
                break;
            } else {
                item.push(c);
            }
        }
        if !closed {
            return None;
        }
        items.push(item);

        while let Some(c) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else {
                break;
            }
        }

        match chars.next() {
            None => break,
            Some(',') => continue,
            Some(_) => return None,
        }
    }

    Some(items)
}
