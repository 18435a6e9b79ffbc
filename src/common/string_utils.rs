//! String utility functions for item field handling.
//!
//! Console input arrives as raw lines. These helpers turn a line into the
//! bounded field value the store keeps.

/// Truncate a string to at most `max_chars` characters
///
/// Cuts on a character boundary, never inside a multi-byte sequence.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_chars("Shotgun", 4), "Shot");
/// assert_eq!(truncate_chars("Kit", 10), "Kit");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Trim surrounding whitespace, then bound the length
pub fn clamp_field(raw: &str, max_chars: usize) -> String {
    truncate_chars(raw.trim(), max_chars).trim_end().to_string()
}

/// Strip the trailing line terminator left by `read_line`
pub fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
