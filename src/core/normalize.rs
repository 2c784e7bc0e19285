/// Normalize a free-text value at the ingestion boundary.
///
/// A value that is empty, whitespace-only, or case-insensitively equal to
/// "nan", "none", or "null" is treated as absent. Everything else is
/// returned trimmed. Builders and the address formatter all go through
/// this one function, so "effectively blank" means the same thing
/// everywhere.
pub fn clean(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if matches!(trimmed.to_lowercase().as_str(), "nan" | "none" | "null") {
        return None;
    }
    Some(trimmed.to_string())
}
