//! Logical key derivation.

/// Text before the first `separator`, or the whole input when it is absent.
///
/// An empty separator splits between characters, so only the first
/// character is kept (empty input stays empty).
///
/// ```ignore
/// substring_before("css/app_ab12.css", "_") -> "css/app"
/// substring_before("css/plain.css", "_")    -> "css/plain.css"
/// ```
#[inline]
pub fn substring_before<'a>(input: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        let end = input.chars().next().map_or(0, char::len_utf8);
        return &input[..end];
    }
    match input.find(separator) {
        Some(end) => &input[..end],
        None => input,
    }
}

/// Build the logical key for an output filename: `prefix + substring_before(..)`.
pub fn logical_key(filename: &str, separator: &str, prefix: &str) -> String {
    let stem = substring_before(filename, separator);
    let mut key = String::with_capacity(prefix.len() + stem.len());
    key.push_str(prefix);
    key.push_str(stem);
    key
}
