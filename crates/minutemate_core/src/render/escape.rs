//! Markup escaping for user-supplied note text.

/// Escapes `&`, `<` and `>` for safe embedding in HTML text content.
///
/// `&` is replaced first so produced entities are not escaped twice.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes optional text; absent input renders as an empty string.
pub fn escape_html_opt(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}
