//! Export filenames

/// Name used when a requested filename has nothing usable left.
pub const DEFAULT_EXPORT_FILENAME: &str = "variables.json";

const EXTENSION: &str = ".json";

/// Reduce a user-supplied filename to a single safe `.json` path component.
///
/// Path separators and whitespace become underscores, anything outside
/// `[A-Za-z0-9._-]` is dropped and leading or trailing dots and underscores
/// are stripped.
pub fn safe_filename(raw: &str) -> String {
    let joined = raw
        .split(|c: char| c == '/' || c == '\\' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() || trimmed == "json" {
        return DEFAULT_EXPORT_FILENAME.to_string();
    }

    if trimmed.ends_with(EXTENSION) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{EXTENSION}")
    }
}
