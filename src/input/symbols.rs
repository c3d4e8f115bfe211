/// Canonical form of a gene symbol: trimmed and upper-cased.
///
/// Blank input normalizes to an empty string, which callers treat as "no query".
pub fn normalize_symbol(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.to_uppercase()
}
