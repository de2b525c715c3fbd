use std::borrow::Cow;

/// Escapes line feeds, carriage returns and double quotes so that `text` can be
/// placed inside a double-quoted string literal. Borrows when nothing needs
/// escaping.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| matches!(c, '\n' | '\r' | '"')) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 8);
    escaped.push_str(&text[..first]);

    for c in text[first..].chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

/// Emits `text` as a double-quoted string literal.
pub fn string_literal(text: &str) -> String {
    format!("\"{}\"", escape_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("plain text", "plain text")]
    #[case("line1\nline2", "line1\\nline2")]
    #[case("\r\n", "\\r\\n")]
    #[case(r#"say "hi""#, r#"say \"hi\""#)]
    #[case("\"\n", "\\\"\\n")]
    #[case("tab\tstays", "tab\tstays")]
    #[case("&amp; stays", "&amp; stays")]
    #[case("ünïcödé\n", "ünïcödé\\n")]
    fn test_escape_text(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(escape_text(text), expected);
    }

    #[test]
    fn test_escape_text_borrows_when_unchanged() {
        assert!(matches!(escape_text("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(escape_text("quote\""), Cow::Owned(_)));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("a\"b"), r#""a\"b""#);
        assert_eq!(string_literal(""), r#""""#);
    }
}
