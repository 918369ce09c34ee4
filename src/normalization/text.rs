/// Missing-value sentinel produced by the upstream export when a cell was
/// empty: the literal string "nan".
const MISSING: &str = "nan";

/// Trim a raw field and unify the absent-value sentinel: empty or "nan"
/// collapses to None, anything else comes back trimmed.
pub fn presence(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == MISSING {
        None
    } else {
        Some(trimmed.to_string())
    }
}
