/// Render `s` as a double-quoted string literal with JSON escapes.
///
/// # Examples
/// ```
/// use pegloom_core::utils::quote;
/// assert_eq!(quote("a"), "\"a\"");
/// assert_eq!(quote("a\nb"), "\"a\\nb\"");
/// ```
pub fn quote(s: &str) -> String {
    // Serializing a str into JSON cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{s}\""))
}

/// Truncate to at most `max_len` characters, marking the cut with `…`.
///
/// # Examples
/// ```
/// use pegloom_core::utils::truncate_text;
/// assert_eq!(truncate_text("abc", 5), "abc");
/// assert_eq!(truncate_text("abcdef", 4), "abc…");
/// ```
pub fn truncate_text(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Human-readable form of a single character for messages.
///
/// Control characters are escaped; everything else is quoted as-is.
pub fn describe_char(c: char) -> String {
    match c {
        '\n' => "\"\\n\"".to_string(),
        '\r' => "\"\\r\"".to_string(),
        '\t' => "\"\\t\"".to_string(),
        c if c.is_control() => format!("\"\\u{{{:04x}}}\"", c as u32),
        c => format!("\"{c}\""),
    }
}
