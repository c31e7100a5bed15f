// HTML escaping

/// Escape the five HTML-special characters (`&`, `<`, `>`, `"`, `'`) so the
/// text can be embedded in markup. Pure function; everything else passes
/// through untouched.
pub fn purify(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
