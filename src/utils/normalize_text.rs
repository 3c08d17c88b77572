/// Canonicalizes a free-text field value: a missing value becomes the empty
/// string, everything else is lowercased and trimmed. Total function, never
/// fails.
pub fn normalize_text(value: Option<&str>) -> String {
    match value {
        Some(text) => text.to_lowercase().trim().to_string(),
        None => String::new(),
    }
}
