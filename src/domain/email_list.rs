/// Splits a comma-separated recipient list.
///
/// Each piece is trimmed and empty pieces are dropped. Order and duplicates are
/// kept, and no address syntax is checked.
pub fn normalize_emails(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(String::from)
        .collect()
}
