//! Untrusted-text escaping for raw-HTML assembly.

/// Escapes the five HTML-significant characters, ampersand first so later
/// substitutions cannot be double-escaped within one pass. `None` is
/// coerced to the empty string.
///
/// Calling this twice double-escapes ampersands introduced by the first
/// pass; idempotence on pre-escaped input is intentionally not provided.
pub fn escape_html(input: Option<&str>) -> String {
    input
        .unwrap_or("")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::escape_html;

    #[test]
    fn escapes_all_five_significant_characters() {
        assert_eq!(
            escape_html(Some(r#"<a href="x" title='y'>&</a>"#)),
            "&lt;a href=&quot;x&quot; title=&#039;y&#039;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn none_is_coerced_to_empty() {
        assert_eq!(escape_html(None), "");
    }

    #[test]
    fn second_pass_double_escapes() {
        let once = escape_html(Some("a < b"));
        assert_eq!(once, "a &lt; b");
        let twice = escape_html(Some(&once));
        assert_eq!(twice, "a &amp;lt; b");
    }
}
